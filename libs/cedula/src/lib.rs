//! # dnid-cedula
//!
//! Validation and formatting for the cedula, the 11-digit national
//! identification number issued by the Dominican Republic government to
//! citizens and residents.
//!
//! ## Design Principles
//!
//! - The canonical form is the compact digit-only string; all operations
//!   work on or produce that form
//! - Validation is a pure, synchronous function: no I/O, no shared mutable
//!   state, safe to call concurrently
//! - A fixed set of issued-but-checksum-invalid cedulas is compiled in and
//!   consulted before the length and checksum rules
//! - Failures are a closed three-variant enum; callers branch on the kind
//!
//! ## Example
//!
//! ```
//! use dnid_cedula::{validate, format, ValidationError};
//!
//! assert_eq!(validate("001-1391820-5").unwrap(), "00113918205");
//! assert_eq!(validate("00113918204"), Err(ValidationError::InvalidChecksum));
//! assert_eq!(format("22400022111"), "224-0002211-1");
//! ```

mod cedula;
mod error;
mod whitelist;

pub use cedula::{compact, format, is_valid, validate, Cedula, CEDULA_LENGTH};
pub use error::ValidationError;
