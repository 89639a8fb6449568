//! Error taxonomy for Airtable API calls
//!
//! Every variant carries enough context (resource path, server message) to
//! diagnose a failure without re-running with extra logging.

use thiserror::Error;

/// Failure of a metadata or record API call. Any variant aborts the run;
/// there are no retries and no partial-success paths.
#[derive(Debug, Error)]
pub enum ApiError {
    /// 401/403 — bad or missing credentials
    #[error("authentication failed for {resource}: {message}")]
    Authentication { resource: String, message: String },

    /// 404 — base or table does not exist or is not shared with this token
    #[error("not found: {resource}")]
    NotFound { resource: String },

    /// Network-level failure (DNS, TLS, timeout, connection reset)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Any other non-success status from the API
    #[error("API error on {resource} (status {status}): {message}")]
    Api {
        resource: String,
        status: u16,
        message: String,
    },
}
