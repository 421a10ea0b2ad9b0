//! Entry point bundling the configuration, the transport and every
//! service gateway.

use serde::Serialize;

use crate::address::AddressGateway;
use crate::bank::BankGateway;
use crate::client::{encode_options, HttpClient, Transport};
use crate::config::Configuration;
use crate::email::EmailGateway;
use crate::error::{LoqateError, SchemaViolation};
use crate::geocoding::GeocodingGateway;
use crate::phone::PhoneGateway;
use crate::response::ResponseEnvelope;

/// Access to every Loqate service through a single transport.
///
/// ## Examples
///
/// ```rust,ignore
/// use loqate::address::FindOptions;
/// use loqate::{Configuration, Gateway};
///
/// let gateway = Gateway::new(Configuration::from_env()?)?;
///
/// let result = gateway
///     .address()
///     .find(&FindOptions::new("EC1Y 8AF").countries("GB"))
///     .await?;
///
/// match result.into_result() {
///     Ok(addresses) => println!("{} candidates", addresses.len()),
///     Err(error) => eprintln!("{}: {}", error.id, error.description),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Gateway<T: Transport = HttpClient> {
    transport: T,
    config: Configuration,
}

impl Gateway<HttpClient> {
    /// Creates a gateway backed by an [`HttpClient`].
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: Configuration) -> Result<Self, LoqateError> {
        let transport = HttpClient::new(&config)?;
        Ok(Self { transport, config })
    }
}

impl<T: Transport> Gateway<T> {
    /// Creates a gateway over an arbitrary transport.
    pub fn with_transport(transport: T, config: Configuration) -> Self {
        Self { transport, config }
    }

    /// The configuration this gateway was built with.
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Address capture.
    pub fn address(&self) -> AddressGateway<'_, T> {
        AddressGateway::new(&self.transport, self.config.language())
    }

    /// Bank account and card validation.
    pub fn bank(&self) -> BankGateway<'_, T> {
        BankGateway::new(&self.transport)
    }

    /// Email validation.
    pub fn email(&self) -> EmailGateway<'_, T> {
        EmailGateway::new(&self.transport)
    }

    /// Phone number validation.
    pub fn phone(&self) -> PhoneGateway<'_, T> {
        PhoneGateway::new(&self.transport)
    }

    /// Geocoding, directions and reverse country lookup.
    pub fn geocoding(&self) -> GeocodingGateway<'_, T> {
        GeocodingGateway::new(&self.transport)
    }
}

/// Encodes `options` and fetches `endpoint` through `transport`.
pub(crate) async fn fetch<T, O>(
    transport: &T,
    operation: &'static str,
    endpoint: &str,
    options: &O,
) -> Result<ResponseEnvelope, SchemaViolation>
where
    T: Transport,
    O: Serialize,
{
    let params = encode_options(operation, options)?;
    transport.get(endpoint, &params).await
}


#[cfg(test)]
mod tests {
    use super::testing::StubTransport;
    use super::*;
    use crate::address::FindOptions;
    use serde_json::json;

    #[tokio::test]
    async fn address_gateway_uses_configured_language() {
        let config = Configuration::builder("fake").language("fr").build().unwrap();
        let gateway = Gateway::with_transport(StubTransport::returning(json!([])), config);

        gateway.address().find(&FindOptions::new("Paris")).await.unwrap();
        assert_eq!(gateway.transport().last_param("Language").as_deref(), Some("fr"));
    }

    #[tokio::test]
    async fn gateways_share_one_transport() {
        let config = Configuration::new("fake").unwrap();
        let gateway = Gateway::with_transport(StubTransport::returning(json!([])), config);

        gateway.address().find(&FindOptions::new("x")).await.unwrap();
        gateway
            .email()
            .batch_validate(&crate::email::BatchValidateOptions::new(["a@example.com"]))
            .await
            .unwrap();

        assert_eq!(gateway.transport().requests.lock().unwrap().len(), 2);
    }

    #[test]
    fn new_builds_http_transport() {
        let config = Configuration::builder("fake")
            .host("http://localhost:8080")
            .build()
            .unwrap();
        let gateway = Gateway::new(config).unwrap();
        assert_eq!(gateway.transport().host().as_str(), "http://localhost:8080/");
    }
}
