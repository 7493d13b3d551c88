//! Core cedula operations: compaction, validation, and formatting.

use crate::error::ValidationError;
use crate::whitelist;

/// Canonical length of a cedula, in digits.
pub const CEDULA_LENGTH: usize = 11;

/// Converts the number to its compact canonical representation.
///
/// Removes every space and hyphen, then trims surrounding whitespace. This
/// never fails; the result may be empty or non-numeric, which downstream
/// validation reports.
#[must_use]
pub fn compact(number: &str) -> String {
    number
        .chars()
        .filter(|c| !matches!(c, ' ' | '-'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Validates the number and returns its compact form.
///
/// The whitelist of issued-but-checksum-invalid cedulas is consulted before
/// the length rule fires, so the listed 10-digit legacy numbers are still
/// accepted.
pub fn validate(number: &str) -> Result<String, ValidationError> {
    let number = compact(number);
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::InvalidFormat);
    }
    if whitelist::is_whitelisted(&number) {
        return Ok(number);
    }
    if number.len() != CEDULA_LENGTH {
        return Err(ValidationError::InvalidLength);
    }
    if !dnid_checkdigit::luhn::is_valid(&number) {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(number)
}

/// Returns true if the number is a valid cedula.
#[must_use]
pub fn is_valid(number: &str) -> bool {
    validate(number).is_ok()
}

/// Reformats the number to the standard `AAA-BBBBBBB-C` presentation.
///
/// Precondition: the input compacts to exactly 11 digits. Shorter or longer
/// input produces malformed (but well-defined, non-panicking) output; call
/// [`validate`] first when the input is untrusted.
#[must_use]
pub fn format(number: &str) -> String {
    let number = compact(number);
    let chars: Vec<char> = number.chars().collect();
    let len = chars.len();
    let g1: String = chars[..len.min(3)].iter().collect();
    let g2: String = if len > 4 {
        chars[3..len - 1].iter().collect()
    } else {
        String::new()
    };
    let g3: String = if len > 0 {
        chars[len - 1..].iter().collect()
    } else {
        String::new()
    };
    std::format!("{g1}-{g2}-{g3}")
}

/// A validated cedula in compact canonical form.
///
/// Constructed only through [`Cedula::parse`] (or `FromStr`), so holding a
/// `Cedula` is proof the number passed validation. Serializes as the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cedula(String);

impl Cedula {
    /// Parses and validates a cedula from a string in any accepted
    /// presentation (separators and surrounding whitespace are ignored).
    pub fn parse(number: &str) -> Result<Self, ValidationError> {
        validate(number).map(Self)
    }

    /// Returns the compact canonical form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the standard grouped presentation, e.g. `224-0002211-1`.
    #[must_use]
    pub fn formatted(&self) -> String {
        format(&self.0)
    }
}

impl std::fmt::Display for Cedula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Cedula {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Cedula {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Cedula {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Cedula {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
