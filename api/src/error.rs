//! Error taxonomy for backend calls.
//!
//! Only `Network` is considered transient and eligible for retry. `Auth`
//! bubbles up so the surrounding shell can redirect to login; `NotFound` is
//! mapped to "no current data" by callers that expect it (e.g. a patient with
//! no active treatment).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or 5xx; retried with backoff.
    #[error("network error: {0}")]
    Network(String),

    /// 401/403; the shell owns the redirect to login.
    #[error("authentication required")]
    Auth,

    /// Other 4xx, surfaced as a user-facing message.
    #[error("request rejected ({status}): {message}")]
    Validation { status: u16, message: String },

    /// 404; usually "no current data" rather than a failure.
    #[error("not found")]
    NotFound,

    /// Payload did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the retry loop should try the request again.
    pub fn is_transient(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
