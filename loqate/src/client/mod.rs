//! HTTP client module.
//!
//! The [`Transport`] trait is the seam between the gateways and the
//! network: it turns an endpoint plus query parameters into a
//! [`ResponseEnvelope`]. [`HttpClient`] is the `reqwest` implementation;
//! tests and alternative runtimes can supply their own.
//!
//! ## Examples
//!
//! ```rust,ignore
//! use loqate::client::{HttpClient, Transport};
//! use loqate::Configuration;
//!
//! let config = Configuration::new("EA69-CD23-CV99-HL18")?;
//! let client = HttpClient::new(&config)?;
//!
//! let params = vec![("Text".to_string(), "Scrubs Lane".to_string())];
//! let envelope = client.get("/Capture/Interactive/Find/v1.00/json3.ws", &params).await?;
//! ```

mod executor;
mod query;

pub use executor::HttpClient;
pub use query::{encode_options, QueryParams};

use std::future::Future;

use crate::error::SchemaViolation;
use crate::response::ResponseEnvelope;

/// Issues authenticated GET requests against the Loqate API.
///
/// Implementations never fail for transport-level problems: a network
/// error or an unexpected status is reported as the sentinel envelope
/// (see [`ResponseEnvelope::transport_failure`]) so that it flows through
/// the normal error path.
pub trait Transport: Send + Sync {
    /// Performs a GET request to `endpoint` with the given wire-named
    /// query parameters.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaViolation::MalformedEnvelope`] if the server answered
    /// successfully with a body that is not a Loqate envelope.
    fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> impl Future<Output = Result<ResponseEnvelope, SchemaViolation>> + Send;
}
