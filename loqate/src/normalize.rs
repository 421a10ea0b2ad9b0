//! Turning a raw envelope into an [`ApiResult`].
//!
//! Every gateway operation runs the same steps:
//!
//! 1. obtain a [`ResponseEnvelope`] from the transport;
//! 2. if the first item carries an error marker, map it with
//!    [`ErrorMapper`] and return [`ApiResult::Failure`];
//! 3. otherwise map the items with [`AttributeMapper`] and return
//!    [`ApiResult::Success`].
//!
//! The functions here are steps 2 and 3. They are pure: the same envelope
//! always produces the same result.

use tracing::debug;

use crate::error::SchemaViolation;
use crate::mapper::{AttributeMapper, ErrorMapper, Shape};
use crate::response::ResponseEnvelope;
use crate::result::ApiResult;

/// Normalizes an envelope that carries exactly one record.
///
/// ## Errors
///
/// Returns [`SchemaViolation::MissingItem`] if the envelope is empty, or a
/// mapping error if the item does not fit `S`.
pub fn normalize_one<S: Shape>(envelope: &ResponseEnvelope) -> Result<ApiResult<S>, SchemaViolation> {
    if let Some(failure) = failure_of(envelope)? {
        return Ok(failure);
    }

    let item = envelope
        .first()
        .ok_or(SchemaViolation::MissingItem { shape: S::NAME })?;

    AttributeMapper.map_one(item).map(ApiResult::success)
}

/// Normalizes an envelope that carries any number of records.
pub fn normalize_many<S: Shape>(
    envelope: &ResponseEnvelope,
) -> Result<ApiResult<Vec<S>>, SchemaViolation> {
    if let Some(failure) = failure_of(envelope)? {
        return Ok(failure);
    }

    debug!(shape = S::NAME, count = envelope.len(), "mapping response items");
    AttributeMapper.map_many(envelope.items()).map(ApiResult::success)
}

/// Normalizes an envelope that carries at most one meaningful record.
///
/// An empty envelope is a success with no value. When several items are
/// present only the first is mapped.
pub fn normalize_optional<S: Shape>(
    envelope: &ResponseEnvelope,
) -> Result<ApiResult<Option<S>>, SchemaViolation> {
    if let Some(failure) = failure_of(envelope)? {
        return Ok(failure);
    }

    envelope
        .first()
        .map(|item| AttributeMapper.map_one(item))
        .transpose()
        .map(ApiResult::success)
}

/// Returns the failure carried by the envelope, if any.
fn failure_of<T>(envelope: &ResponseEnvelope) -> Result<Option<ApiResult<T>>, SchemaViolation> {
    if !envelope.has_error() {
        return Ok(None);
    }

    let Some(item) = envelope.first() else {
        return Ok(None);
    };

    let error = ErrorMapper.map_one(item)?;
    debug!(id = error.id, description = %error.description, "response reported an error");

    Ok(Some(ApiResult::failure(error)))
}
