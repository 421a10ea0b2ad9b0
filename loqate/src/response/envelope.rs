//! The raw response envelope.

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ClientError, SchemaViolation};

/// A single untyped response item.
pub type RawItem = Map<String, Value>;

/// Key marking an item as an error report.
pub const ERROR_KEY: &str = "Error";

/// Error id of the sentinel substituted for transport failures.
pub const SENTINEL_ERROR_ID: i64 = -2;

/// Description of the sentinel error.
pub const SENTINEL_DESCRIPTION: &str = "Something went wrong - please try again later";

/// Resolution of the sentinel error.
pub const SENTINEL_RESOLUTION: &str = "Try again later";

/// The items of a Loqate response, before any typing.
///
/// The wire body is `{"Items": [...]}`. Only the first item is inspected
/// for an error marker.
///
/// ## Examples
///
/// ```rust
/// use loqate::response::ResponseEnvelope;
///
/// let envelope = ResponseEnvelope::from_slice(br#"{"Items":[{"Error":"1001"}]}"#).unwrap();
/// assert!(envelope.has_error());
///
/// let envelope = ResponseEnvelope::from_slice(br#"{"Items":[]}"#).unwrap();
/// assert!(!envelope.has_error());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "Items")]
    items: Vec<RawItem>,
}

impl ResponseEnvelope {
    /// Creates an envelope from already parsed items.
    pub fn new(items: Vec<RawItem>) -> Self {
        Self { items }
    }

    /// Parses a wire body.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaViolation::MalformedEnvelope`] if the body is not a
    /// JSON object with an `Items` array of objects.
    pub fn from_slice(body: &[u8]) -> Result<Self, SchemaViolation> {
        serde_json::from_slice(body).map_err(SchemaViolation::MalformedEnvelope)
    }

    /// Builds the single-item sentinel envelope for a transport failure.
    ///
    /// The sentinel flows through the same error path as an error reported
    /// by the service and maps to a [`RemoteError`](crate::RemoteError)
    /// with id [`SENTINEL_ERROR_ID`].
    pub fn transport_failure(cause: impl Into<String>) -> Self {
        let mut item = RawItem::new();
        item.insert(ERROR_KEY.to_string(), Value::from(SENTINEL_ERROR_ID.to_string()));
        item.insert("Description".to_string(), Value::from(SENTINEL_DESCRIPTION));
        item.insert("Cause".to_string(), Value::from(cause.into()));
        item.insert("Resolution".to_string(), Value::from(SENTINEL_RESOLUTION));

        Self::new(vec![item])
    }

    /// Builds the sentinel envelope for an unexpected HTTP status.
    pub fn unexpected_status(status: u16) -> Self {
        Self::transport_failure(format!("Unexpected HTTP status {status}"))
    }

    /// Builds the sentinel envelope for a failed request.
    pub fn from_client_error(error: &ClientError) -> Self {
        match error.status_code() {
            Some(status) => Self::unexpected_status(status),
            None => Self::transport_failure(error.to_string()),
        }
    }

    /// Returns `true` if the first item carries an error marker.
    ///
    /// An empty envelope never has an error. A marker whose value is `null`
    /// does not count.
    pub fn has_error(&self) -> bool {
        self.items
            .first()
            .and_then(|item| item.get(ERROR_KEY))
            .is_some_and(|marker| !marker.is_null())
    }

    /// The raw items, unmodified.
    pub fn items(&self) -> &[RawItem] {
        &self.items
    }

    /// The first item, if any.
    pub fn first(&self) -> Option<&RawItem> {
        self.items.first()
    }

    /// Returns `true` if the response carried no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Consumes the envelope, returning its items.
    pub fn into_items(self) -> Vec<RawItem> {
        self.items
    }
}

impl From<Vec<RawItem>> for ResponseEnvelope {
    fn from(items: Vec<RawItem>) -> Self {
        Self::new(items)
    }
}
