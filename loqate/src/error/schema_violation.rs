//! Payload shape mismatches.

use thiserror::Error;

/// A response payload that does not match the shape the client expects.
///
/// A schema violation is a defect in the assumed schema, not a business
/// failure: it is never wrapped in
/// [`ApiResult::Failure`](crate::ApiResult::Failure) and is returned as an
/// `Err` from both the plain and the raising variant of every operation.
#[derive(Debug, Error)]
pub enum SchemaViolation {
    /// An item could not be mapped into the target shape (missing field,
    /// mistyped value, or an enum value outside its literal set).
    #[error("response item does not match {shape}: {source}")]
    Mismatch {
        /// Name of the target shape.
        shape: &'static str,
        /// The underlying deserialization error.
        #[source]
        source: serde_json::Error,
    },

    /// A single record was expected but the response carried no items.
    #[error("expected one {shape} item, but the response is empty")]
    MissingItem {
        /// Name of the target shape.
        shape: &'static str,
    },

    /// The response body is not a JSON object with an `Items` array.
    #[error("malformed response envelope: {0}")]
    MalformedEnvelope(#[source] serde_json::Error),

    /// Request options could not be encoded as query parameters.
    #[error("cannot encode options for {operation}: {source}")]
    Options {
        /// The operation whose options failed to encode.
        operation: &'static str,
        /// The underlying serialization error.
        #[source]
        source: serde_json::Error,
    },
}

impl SchemaViolation {
    /// Creates a mismatch error for the given shape.
    pub fn mismatch(shape: &'static str, source: serde_json::Error) -> Self {
        Self::Mismatch { shape, source }
    }

    /// Returns the name of the shape involved, if any.
    pub fn shape(&self) -> Option<&'static str> {
        match self {
            Self::Mismatch { shape, .. } | Self::MissingItem { shape } => Some(*shape),
            Self::MalformedEnvelope(_) | Self::Options { .. } => None,
        }
    }
}
