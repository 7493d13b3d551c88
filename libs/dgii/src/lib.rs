//! # dnid-dgii
//!
//! Registration lookups against the web service run by the Dirección
//! General de Impuestos Internos (DGII), the Dominican Republic tax
//! department.
//!
//! The service is keyed by RNC (taxpayer registration number) but resolves
//! cedulas through the same endpoint, so this crate serves both. Lookups
//! need live network access; the core validation crates never depend on
//! this one. Consumers that want to stay testable should accept the
//! [`RegistrationLookup`] trait rather than [`DgiiClient`] directly.

mod client;
mod error;
mod types;

pub use client::{DgiiClient, RegistrationLookup, DEFAULT_ENDPOINT};
pub use error::DgiiError;
pub use types::RegistrationInfo;
