//! Top-level error type.

use super::{ClientError, ConfigError, RemoteError, SchemaViolation};
use thiserror::Error;

/// Top-level error type for all Loqate operations.
///
/// The `*_or_raise` gateway operations return this type: a
/// [`RemoteError`] reported by the service becomes [`LoqateError::Remote`],
/// while schema violations keep their own variant.
///
/// ## Examples
///
/// ```rust,ignore
/// use loqate::LoqateError;
///
/// fn handle_error(err: LoqateError) {
///     match err {
///         LoqateError::Remote(e) => eprintln!("Loqate refused the request: {e}"),
///         LoqateError::Schema(e) => eprintln!("Unexpected payload: {e}"),
///         LoqateError::Client(e) => eprintln!("HTTP client error: {e}"),
///         LoqateError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum LoqateError {
    /// An error reported by the service (or the transport sentinel).
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// The response payload did not match the expected shape.
    #[error(transparent)]
    Schema(#[from] SchemaViolation),

    /// The HTTP client could not be constructed.
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl LoqateError {
    /// Returns the remote error if this is a service-reported failure.
    pub fn as_remote(&self) -> Option<&RemoteError> {
        match self {
            Self::Remote(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_remote_error() {
        let remote = RemoteError::new(1001, "Start Required", "c", "r");
        let err: LoqateError = remote.into();
        assert!(matches!(err, LoqateError::Remote(_)));
        assert_eq!(err.as_remote().map(|e| e.id), Some(1001));
    }

    #[test]
    fn test_remote_display_is_transparent() {
        let err = LoqateError::Remote(RemoteError::new(1004, "Language Invalid", "c", "r"));
        assert_eq!(err.to_string(), "Language Invalid");
    }

    #[test]
    fn test_from_schema_violation() {
        let err: LoqateError = SchemaViolation::MissingItem { shape: "Country" }.into();
        assert!(matches!(err, LoqateError::Schema(_)));
        assert!(err.as_remote().is_none());
    }
}
