//! Error taxonomy for backend calls.
//!
//! Resource methods surface failures unchanged to the caller: transport
//! errors come straight from reqwest, non-2xx statuses carry the raw
//! response body, and 401 gets its own variant so callers can decide what
//! to do with an expired credential. The client itself never recovers,
//! retries, or clears session state.

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport failure or response-body decode failure.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend rejected the credential (HTTP 401).
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx response.
    #[error("Request failed with status {status}: {body}")]
    Status {
        /// HTTP status code of the response.
        status: reqwest::StatusCode,
        /// Raw response body, usually a backend error message.
        body: String,
    },
}

impl ApiError {
    /// True if this error is an expired or invalid credential.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_status_and_body() {
        let err = ApiError::Status {
            status: reqwest::StatusCode::NOT_FOUND,
            body: "producto no encontrado".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Request failed with status 404 Not Found: producto no encontrado"
        );
    }

    #[test]
    fn unauthorized_is_detectable() {
        let err = ApiError::Unauthorized("token expirado".to_string());
        assert!(err.is_unauthorized());

        let err = ApiError::Status {
            status: reqwest::StatusCode::BAD_REQUEST,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
    }
}
