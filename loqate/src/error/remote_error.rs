//! Errors reported by the Loqate service.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error item returned by the Loqate API.
///
/// Every service reports failures as an item carrying an `Error` code plus
/// descriptive text. Transport failures are folded into the same type
/// through a sentinel item (see
/// [`ResponseEnvelope::transport_failure`](crate::response::ResponseEnvelope::transport_failure)).
///
/// Two errors are equal when they share the same [`id`](Self::id); the
/// accompanying text is ignored. See [`same_id`](Self::same_id).
///
/// ## Examples
///
/// ```rust
/// use loqate::RemoteError;
///
/// let a = RemoteError::new(1004, "Language Invalid", "c", "r");
/// let b = RemoteError::new(1004, "Another text", "x", "y");
/// assert_eq!(a, b);
/// assert_eq!(a.to_string(), "Language Invalid");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Error)]
#[error("{description}")]
pub struct RemoteError {
    /// Unique identifier of the error.
    pub id: i64,
    /// Descriptive information about the error.
    pub description: String,
    /// What caused the error.
    pub cause: String,
    /// How to solve the error.
    pub resolution: String,
}

impl RemoteError {
    /// Creates a new remote error.
    pub fn new(
        id: i64,
        description: impl Into<String>,
        cause: impl Into<String>,
        resolution: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            cause: cause.into(),
            resolution: resolution.into(),
        }
    }

    /// Returns `true` if both errors carry the same code.
    ///
    /// Error identity is the code, not its accompanying text.
    pub fn same_id(&self, other: &Self) -> bool {
        self.id == other.id
    }

    /// Returns `true` if this error was synthesized for a transport failure
    /// rather than reported by the service.
    pub fn is_transport_failure(&self) -> bool {
        self.id == crate::response::SENTINEL_ERROR_ID
    }
}

impl PartialEq for RemoteError {
    fn eq(&self, other: &Self) -> bool {
        self.same_id(other)
    }
}

impl Eq for RemoteError {}

impl Hash for RemoteError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_ids_are_equal_regardless_of_text() {
        let a = RemoteError::new(1001, "Start Required", "cause a", "resolution a");
        let b = RemoteError::new(1001, "Different", "cause b", "resolution b");
        assert!(a.same_id(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn different_ids_are_not_equal() {
        let a = RemoteError::new(1001, "Start Required", "c", "r");
        let b = RemoteError::new(1002, "Start Required", "c", "r");
        assert!(!a.same_id(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn display_is_the_description() {
        let err = RemoteError::new(1004, "Language Invalid", "c", "r");
        assert_eq!(err.to_string(), "Language Invalid");
    }

    #[test]
    fn sentinel_id_marks_transport_failure() {
        let err = RemoteError::new(-2, "Something went wrong", "status 503", "Try again later");
        assert!(err.is_transport_failure());
        assert!(!RemoteError::new(1001, "d", "c", "r").is_transport_failure());
    }
}
