//! Loqate API Client
//!
//! A typed client for Loqate's address capture, bank, email, phone and
//! geocoding services. Every gateway operation sends a GET request,
//! receives an envelope of items, and normalizes it into an [`ApiResult`]:
//! either typed records or the [`RemoteError`] the service reported.
//!
//! ## Core Types
//!
//! - [`Gateway`] - Entry point giving access to every service
//! - [`Configuration`] - API key, host, language and timeout
//! - [`ApiResult`] - Success value or reported error
//! - [`RemoteError`] - An error reported by the service
//! - [`LoqateError`] - Error returned by the `*_or_raise` operations
//! - [`Transport`] - Seam between gateways and HTTP, implemented by [`HttpClient`]
//!
//! ## Normalization
//!
//! - [`naming`] - Key transcoding between `PascalCase` and `snake_case`
//! - [`mapper`] - Raw items into records ([`mapper::AttributeMapper`]) and
//!   errors ([`mapper::ErrorMapper`])
//! - [`normalize`] - Envelope into [`ApiResult`]
//!
//! ## Error Semantics
//!
//! There are two kinds of failure. A [`RemoteError`] is *data*: the service
//! answered, and the answer was "no". It travels inside
//! [`ApiResult::Failure`]. A [`SchemaViolation`] means the answer could not
//! be understood; it is returned as the `Err` of the operation.
//!
//! Network failures and unexpected HTTP statuses never surface as errors.
//! The transport substitutes a sentinel item with id `-2`, so they arrive
//! as an ordinary [`ApiResult::Failure`] (see
//! [`RemoteError::is_transport_failure`]).
//!
//! ## Examples
//!
//! ```rust,ignore
//! use loqate::email::ValidateOptions;
//! use loqate::{Configuration, Gateway};
//!
//! let gateway = Gateway::new(Configuration::from_env()?)?;
//!
//! let result = gateway
//!     .email()
//!     .validate(&ValidateOptions::new("user@example.com"))
//!     .await?;
//!
//! if let Some(validation) = result.value() {
//!     println!("valid: {}", validation.is_valid());
//! }
//! ```

pub mod address;
pub mod bank;
pub mod client;
pub mod config;
pub mod email;
pub mod error;
mod gateway;
pub mod geocoding;
pub mod mapper;
pub mod naming;
pub mod normalize;
pub mod phone;
pub mod response;
mod result;

pub use client::{HttpClient, Transport};
pub use config::Configuration;
pub use error::{ClientError, ConfigError, LoqateError, RemoteError, SchemaViolation};
pub use gateway::Gateway;
pub use result::{unwrap_or_raise, ApiResult};
