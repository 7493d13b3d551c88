//! # dnid-checkdigit
//!
//! Check-digit primitives shared by the dnid identifier crates.
//!
//! These are pure functions over digit strings with no knowledge of any
//! particular national number format. Format rules (length, separators,
//! exception lists) live in the crates that own the format.

pub mod luhn;
