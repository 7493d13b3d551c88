//! Luhn mod-10 checksum (double-and-sum).
//!
//! Every second digit, counting from the right, is doubled; doubled values
//! above 9 have 9 subtracted. A number is valid when the digit sum is a
//! multiple of 10.

/// Computes the Luhn sum mod 10 of a digit string.
///
/// Returns `None` if the string is empty or contains a non-digit character.
/// A result of `Some(0)` means the number passes the check.
#[must_use]
pub fn checksum(number: &str) -> Option<u32> {
    if number.is_empty() {
        return None;
    }

    let mut sum = 0u32;
    for (i, ch) in number.chars().rev().enumerate() {
        let digit = ch.to_digit(10)?;
        sum += if i % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 {
                doubled - 9
            } else {
                doubled
            }
        } else {
            digit
        };
    }

    Some(sum % 10)
}

/// Returns true if `number` is a nonempty digit string with a valid Luhn
/// checksum over all of its digits, check digit included.
#[must_use]
pub fn is_valid(number: &str) -> bool {
    checksum(number) == Some(0)
}

/// Computes the check digit that makes `number` + digit Luhn-valid.
///
/// Returns `None` if `number` contains a non-digit character.
#[must_use]
pub fn calc_check_digit(number: &str) -> Option<char> {
    let mut shifted = String::with_capacity(number.len() + 1);
    shifted.push_str(number);
    shifted.push('0');
    let sum = checksum(&shifted)?;
    char::from_digit((10 - sum) % 10, 10)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("79927398713")]
    #[case("00113918205")]
    #[case("22400022111")]
    #[case("0")]
    #[case("18")]
    fn test_valid_numbers(#[case] number: &str) {
        assert!(is_valid(number));
    }

    #[rstest]
    #[case("79927398710")]
    #[case("00113918204")]
    #[case("1")]
    fn test_invalid_checksums(#[case] number: &str) {
        assert!(!is_valid(number));
    }

    #[rstest]
    #[case("")]
    #[case("7992739871a")]
    #[case("79 927 398")]
    fn test_non_digit_input_is_never_valid(#[case] number: &str) {
        assert_eq!(checksum(number), None);
        assert!(!is_valid(number));
    }

    #[test]
    fn test_calc_check_digit() {
        let partial = "7992739871";
        let digit = calc_check_digit(partial).unwrap();
        assert_eq!(digit, '3');

        let mut full = partial.to_string();
        full.push(digit);
        assert!(is_valid(&full));
    }

    #[test]
    fn test_calc_check_digit_rejects_non_digits() {
        assert_eq!(calc_check_digit("12x"), None);
    }

    #[test]
    fn test_calc_check_digit_completes_every_prefix() {
        for prefix in ["0", "12345", "999999999", "0011391820"] {
            let digit = calc_check_digit(prefix).unwrap();
            let mut full = prefix.to_string();
            full.push(digit);
            assert!(is_valid(&full), "{full}");
        }
    }
}
