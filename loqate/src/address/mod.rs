//! Address capture: find candidates, then retrieve the full address.

mod types;

pub use types::{Address, DetailedAddress, FindOptions, RetrieveOptions};

use crate::client::{encode_options, Transport};
use crate::error::{LoqateError, SchemaViolation};
use crate::gateway::fetch;
use crate::normalize::{normalize_many, normalize_one};
use crate::result::{unwrap_or_raise, ApiResult};

/// Endpoint for finding address candidates.
pub const FIND_ENDPOINT: &str = "/Capture/Interactive/Find/v1.00/json3.ws";

/// Endpoint for retrieving a full address.
pub const RETRIEVE_ENDPOINT: &str = "/Capture/Interactive/Retrieve/v1.00/json3.ws";

/// Gateway to the address capture service.
///
/// ## Examples
///
/// ```rust,ignore
/// use loqate::address::{FindOptions, RetrieveOptions};
///
/// let address = gateway.address();
/// let candidates = address.find_or_raise(&FindOptions::new("EC1Y 8AF")).await?;
///
/// if let Some(first) = candidates.iter().find(|c| c.is_address()) {
///     let detailed = address.retrieve_or_raise(&RetrieveOptions::new(&first.id)).await?;
///     println!("{:?}", detailed.line1);
/// }
/// ```
#[derive(Debug)]
pub struct AddressGateway<'a, T: Transport> {
    transport: &'a T,
    language: &'a str,
}

impl<'a, T: Transport> AddressGateway<'a, T> {
    /// Creates a gateway that sends `language` when a find request does not
    /// name one.
    pub fn new(transport: &'a T, language: &'a str) -> Self {
        Self {
            transport,
            language,
        }
    }

    /// Finds addresses matching the search text.
    ///
    /// ## Errors
    ///
    /// Returns a [`SchemaViolation`] if the response does not match
    /// [`Address`].
    pub async fn find(
        &self,
        options: &FindOptions,
    ) -> Result<ApiResult<Vec<Address>>, SchemaViolation> {
        let mut params = encode_options("address.find", options)?;
        if options.language.is_none() {
            params.push(("Language".to_string(), self.language.to_string()));
        }

        let envelope = self.transport.get(FIND_ENDPOINT, &params).await?;
        normalize_many(&envelope)
    }

    /// Retrieves the full address for a candidate id.
    ///
    /// ## Errors
    ///
    /// Returns a [`SchemaViolation`] if the response is empty or does not
    /// match [`DetailedAddress`].
    pub async fn retrieve(
        &self,
        options: &RetrieveOptions,
    ) -> Result<ApiResult<DetailedAddress>, SchemaViolation> {
        let envelope = fetch(self.transport, "address.retrieve", RETRIEVE_ENDPOINT, options).await?;
        normalize_one(&envelope)
    }

    /// Like [`find`](Self::find), but a reported error becomes
    /// [`LoqateError::Remote`].
    pub async fn find_or_raise(&self, options: &FindOptions) -> Result<Vec<Address>, LoqateError> {
        Ok(unwrap_or_raise(self.find(options).await?)?)
    }

    /// Like [`retrieve`](Self::retrieve), but a reported error becomes
    /// [`LoqateError::Remote`].
    pub async fn retrieve_or_raise(
        &self,
        options: &RetrieveOptions,
    ) -> Result<DetailedAddress, LoqateError> {
        Ok(unwrap_or_raise(self.retrieve(options).await?)?)
    }
}
