//! Configuration errors.

use thiserror::Error;

/// Errors in client configuration.
///
/// These occur while building a [`Configuration`](crate::Configuration) and
/// indicate programmer or deployment errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No API key was supplied.
    #[error("Missing API key (set {env_var} or pass one explicitly)")]
    MissingApiKey {
        /// The environment variable consulted for the key.
        env_var: &'static str,
    },

    /// The host is not a valid absolute URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The host URL cannot serve as a base for endpoint paths.
    #[error("Host cannot be used as a base URL: {host}")]
    UnsupportedHost {
        /// The rejected host.
        host: String,
    },

    /// The preferred language is empty.
    #[error("Language must not be empty")]
    EmptyLanguage,
}

impl ConfigError {
    /// Creates a missing API key error for the given environment variable.
    pub fn missing_api_key(env_var: &'static str) -> Self {
        Self::MissingApiKey { env_var }
    }
}
