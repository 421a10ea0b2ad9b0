//! Layered error types for the Loqate client.
//!
//! - [`LoqateError`] - Top-level error type returned by the raising variants
//! - [`RemoteError`] - An error item reported by the Loqate service itself
//! - [`SchemaViolation`] - A payload that does not match the expected shape
//! - [`ClientError`] - HTTP client construction and transport errors
//! - [`ConfigError`] - Configuration errors

mod client_error;
mod config_error;
mod loqate_error;
mod remote_error;
mod schema_violation;

pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use loqate_error::LoqateError;
pub use remote_error::RemoteError;
pub use schema_violation::SchemaViolation;
