//! Request execution with tracing instrumentation.
//!
//! This module provides the [`HttpClient`], the only component aware of
//! HTTP concerns such as status codes and headers.

use reqwest::header::{HeaderValue, ACCEPT};
use tracing::{debug, instrument, warn, Span};
use url::Url;

use super::Transport;
use crate::config::Configuration;
use crate::error::{ClientError, SchemaViolation};
use crate::response::ResponseEnvelope;

/// Name of the query parameter carrying the API key.
const KEY_PARAM: &str = "Key";

/// Async HTTP client for the Loqate API.
///
/// Every request is a GET to `host + endpoint` with the API key appended as
/// the `Key` query parameter and JSON requested through the `Accept`
/// header.
///
/// ## Examples
///
/// ```rust,ignore
/// use loqate::client::HttpClient;
/// use loqate::Configuration;
///
/// let config = Configuration::new("EA69-CD23-CV99-HL18")?;
/// let client = HttpClient::new(&config)?;
///
/// let envelope = client.get("/Capture/Interactive/Find/v1.00/json3.ws", &[]).await?;
/// println!("{} items", envelope.len());
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    host: Url,
    api_key: String,
}

impl HttpClient {
    /// Creates a client from the given configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Configuration) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            client,
            host: config.host().clone(),
            api_key: config.api_key().to_string(),
        })
    }

    /// Returns the base URL for this client.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Performs a GET request and parses the response envelope.
    ///
    /// Network failures and non-success statuses are logged and returned as
    /// the sentinel envelope.
    ///
    /// ## Errors
    ///
    /// Returns [`SchemaViolation::MalformedEnvelope`] if a successful
    /// response body is not a Loqate envelope.
    #[instrument(
        name = "loqate_request",
        skip(self, params),
        fields(
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<ResponseEnvelope, SchemaViolation> {
        let url = self.endpoint_url(endpoint);

        // The key is never recorded in the span.
        Span::current().record("http.url", url.as_str());

        let request = self
            .client
            .get(url)
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .query(&[(KEY_PARAM, self.api_key.as_str())])
            .query(params);

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                let error = ClientError::Request(e);
                warn!(error = %error, "request failed, substituting sentinel error");
                return Ok(ResponseEnvelope::from_client_error(&error));
            }
        };

        let status = response.status();
        let status_code = status.as_u16();
        Span::current().record("http.status_code", status_code);

        if !status.is_success() {
            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            let error = ClientError::HttpStatus {
                status: status_code,
                message: response.text().await.unwrap_or_default(),
            };
            warn!(error = %error, "unexpected status, substituting sentinel error");
            return Ok(ResponseEnvelope::from_client_error(&error));
        }

        let body = match response.bytes().await {
            Ok(body) => body,
            Err(e) => {
                Span::current().record("otel.status_code", "ERROR");
                let error = ClientError::Request(e);
                warn!(error = %error, "failed to read body, substituting sentinel error");
                return Ok(ResponseEnvelope::from_client_error(&error));
            }
        };

        Span::current().record("otel.status_code", "OK");

        let envelope = parse_body(&body)?;
        debug!(items = envelope.len(), has_error = envelope.has_error(), "received response");

        Ok(envelope)
    }

    /// Appends the endpoint path to the host, keeping any path prefix the
    /// host already has.
    fn endpoint_url(&self, endpoint: &str) -> Url {
        let mut url = self.host.clone();
        let path = format!(
            "{}/{}",
            self.host.path().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        url.set_path(&path);
        url
    }
}

fn parse_body(body: &bytes::Bytes) -> Result<ResponseEnvelope, SchemaViolation> {
    ResponseEnvelope::from_slice(body.as_ref())
}

impl Transport for HttpClient {
    async fn get(
        &self,
        endpoint: &str,
        params: &[(String, String)],
    ) -> Result<ResponseEnvelope, SchemaViolation> {
        HttpClient::get(self, endpoint, params).await
    }
}
