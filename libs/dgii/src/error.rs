//! Error types for DGII lookups.

use thiserror::Error;

/// Errors that can occur when querying the DGII web service.
#[derive(Debug, Error)]
pub enum DgiiError {
    /// Transport-level failure (connect, timeout, TLS, non-success status).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The SOAP envelope did not contain the expected result element.
    #[error("unexpected response envelope: {0}")]
    UnexpectedEnvelope(String),

    /// The result element held a payload that is not the documented JSON.
    #[error("malformed result payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
