//! Mapping of error items into [`RemoteError`].

use serde_json::Value;
use tracing::warn;

use super::transcode_keys;
use crate::error::{RemoteError, SchemaViolation};
use crate::response::RawItem;

/// Shape name reported when an error item cannot be mapped.
const SHAPE: &str = "RemoteError";

/// Maps error items into [`RemoteError`] values.
///
/// Keys are transcoded as for [`AttributeMapper`](super::AttributeMapper);
/// the transcoded `error` field is then renamed to `id` and coerced to an
/// integer.
///
/// ## Examples
///
/// ```rust
/// use loqate::mapper::ErrorMapper;
/// use serde_json::json;
///
/// let item = json!({
///     "Error": "1004", "Description": "Language Invalid", "Cause": "c", "Resolution": "r"
/// });
/// let error = ErrorMapper.map_one(item.as_object().unwrap()).unwrap();
/// assert_eq!(error.id, 1004);
/// assert_eq!(error.description, "Language Invalid");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorMapper;

impl ErrorMapper {
    /// Maps a single error item.
    ///
    /// A code that is not numeric maps to id `0`. That id is never sent by
    /// the service, so treat it as a mapping-layer signal rather than a
    /// real error code.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaViolation::Mismatch`] if the description, cause or
    /// resolution is missing or not a string.
    pub fn map_one(&self, item: &RawItem) -> Result<RemoteError, SchemaViolation> {
        let mut attributes = transcode_keys(item);

        let code = attributes.remove("error");
        let id = code.as_ref().and_then(coerce_code).unwrap_or_else(|| {
            // FIXME: surface malformed codes as a SchemaViolation once callers
            // stop relying on id 0.
            warn!(code = ?code, "error item carries a non-numeric code, mapping to 0");
            0
        });
        attributes.insert("id".to_string(), Value::from(id));

        serde_json::from_value(Value::Object(attributes))
            .map_err(|source| SchemaViolation::mismatch(SHAPE, source))
    }

    /// Maps every error item, in order.
    pub fn map_many(&self, items: &[RawItem]) -> Result<Vec<RemoteError>, SchemaViolation> {
        items.iter().map(|item| self.map_one(item)).collect()
    }
}

/// Reads an error code from a JSON number or a numeric string. Fractional
/// codes are truncated.
fn coerce_code(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().and_then(truncate)),
        Value::String(s) => {
            let s = s.trim();
            s.parse()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    }
}

fn truncate(code: f64) -> Option<i64> {
    code.is_finite().then(|| code.trunc() as i64)
}
