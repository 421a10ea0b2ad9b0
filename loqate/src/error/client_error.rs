//! HTTP client and network errors.

use thiserror::Error;

/// Errors from the HTTP client layer.
///
/// Only [`HttpClient`](crate::client::HttpClient) construction surfaces these
/// to callers. Failures while a request is in flight are folded into the
/// sentinel envelope by [`ResponseEnvelope::from_client_error`](crate::response::ResponseEnvelope::from_client_error).
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed due to network or protocol error.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success HTTP status code.
    #[error("HTTP {status}: {message}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: u16,
        /// Error message from the response body.
        message: String,
    },

    /// The underlying HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Build(String),
}

impl ClientError {
    /// Returns the HTTP status code if one was observed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::Build(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_extraction() {
        let err = ClientError::HttpStatus {
            status: 503,
            message: "Service Unavailable".to_string(),
        };
        assert_eq!(err.status_code(), Some(503));

        let build = ClientError::Build("tls backend missing".to_string());
        assert_eq!(build.status_code(), None);
    }

    #[test]
    fn test_http_status_display() {
        let err = ClientError::HttpStatus {
            status: 500,
            message: "Internal Server Error".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 500: Internal Server Error");
    }
}
