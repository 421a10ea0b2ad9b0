//! Client configuration.

use std::env;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default base URL for Loqate's services.
pub const DEFAULT_HOST: &str = "https://api.addressy.com";

/// Default preferred language for results.
pub const DEFAULT_LANGUAGE: &str = "en-gb";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "LOQATE_API_KEY";

/// Environment variable overriding the host.
pub const HOST_ENV: &str = "LOQATE_HOST";

/// Environment variable overriding the preferred language.
pub const LANGUAGE_ENV: &str = "LOQATE_LANGUAGE";

/// Configuration shared by every gateway.
///
/// ## Examples
///
/// ```rust
/// use loqate::Configuration;
///
/// let config = Configuration::builder("EA69-CD23-CV99-HL18")
///     .language("fr")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.host().as_str(), "https://api.addressy.com/");
/// assert_eq!(config.language(), "fr");
/// ```
#[derive(Debug, Clone)]
pub struct Configuration {
    api_key: String,
    host: Url,
    language: String,
    timeout: Duration,
}

impl Configuration {
    /// Creates a configuration with default host, language and timeout.
    ///
    /// ## Errors
    ///
    /// Returns an error if the API key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ConfigError> {
        Self::builder(api_key).build()
    }

    /// Creates a builder for a configuration using the given API key.
    pub fn builder(api_key: impl Into<String>) -> ConfigurationBuilder {
        ConfigurationBuilder::new(api_key.into())
    }

    /// Reads the configuration from `LOQATE_API_KEY`, `LOQATE_HOST` and
    /// `LOQATE_LANGUAGE`. Only the API key is required.
    ///
    /// ## Errors
    ///
    /// Returns an error if the API key is unset or empty, or if the host is
    /// not a valid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::missing_api_key(API_KEY_ENV))?;

        let mut builder = Self::builder(api_key);
        if let Ok(host) = env::var(HOST_ENV) {
            builder = builder.host(host);
        }
        if let Ok(language) = env::var(LANGUAGE_ENV) {
            builder = builder.language(language);
        }

        builder.build()
    }

    /// API key that gives access to all services.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Base URL for Loqate's services.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Preferred language for results.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

/// Builder for a [`Configuration`].
#[derive(Debug)]
pub struct ConfigurationBuilder {
    api_key: String,
    host: String,
    language: String,
    timeout: Duration,
}

impl ConfigurationBuilder {
    fn new(api_key: String) -> Self {
        Self {
            api_key,
            host: DEFAULT_HOST.to_string(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Sets the base URL, e.g. `http://localhost:8080` for a test server.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the preferred language (2 or 4 character code, e.g. `en`,
    /// `en-gb`).
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`Configuration`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the API key or language is empty, or if the
    /// host is not an absolute URL that can carry endpoint paths.
    pub fn build(self) -> Result<Configuration, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::missing_api_key(API_KEY_ENV));
        }
        if self.language.trim().is_empty() {
            return Err(ConfigError::EmptyLanguage);
        }

        let host = Url::parse(&self.host)?;
        if host.cannot_be_a_base() {
            return Err(ConfigError::UnsupportedHost { host: self.host });
        }

        Ok(Configuration {
            api_key: self.api_key,
            host,
            language: self.language,
            timeout: self.timeout,
        })
    }
}
