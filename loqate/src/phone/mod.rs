//! Phone number validation.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use strum::{Display, EnumString};

use crate::client::Transport;
use crate::error::{LoqateError, SchemaViolation};
use crate::gateway::fetch;
use crate::mapper::Shape;
use crate::normalize::normalize_one;
use crate::result::{unwrap_or_raise, ApiResult};

pub const VALIDATE_ENDPOINT: &str = "/PhoneNumberValidation/Interactive/Validate/v2.20/json3.ws";

/// Whether the number is in service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Validity {
    Yes,
    No,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum NumberType {
    Mobile,
    Landline,
    Voip,
    Unknown,
}

/// Result of validating a phone number.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneNumberValidation {
    /// The number in international format.
    pub phone_number: String,
    pub request_processed: bool,
    pub is_valid: Validity,
    pub network_code: String,
    pub network_name: String,
    pub network_country: String,
    pub national_format: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub country_prefix: i64,
    pub number_type: NumberType,
}

impl PhoneNumberValidation {
    pub fn is_valid(&self) -> bool {
        self.is_valid == Validity::Yes
    }
}

impl Shape for PhoneNumberValidation {
    const NAME: &'static str = "PhoneNumberValidation";
}

/// Options for [`PhoneGateway::validate`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateOptions {
    pub phone: String,
    /// ISO 2 or 3 character code of the country to assume for numbers
    /// without an international prefix.
    pub country: Option<String>,
}

impl ValidateOptions {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            country: None,
        }
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }
}

/// Gateway to the phone number validation service.
#[derive(Debug)]
pub struct PhoneGateway<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> PhoneGateway<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Validates a phone number.
    pub async fn validate(
        &self,
        options: &ValidateOptions,
    ) -> Result<ApiResult<PhoneNumberValidation>, SchemaViolation> {
        let envelope = fetch(self.transport, "phone.validate", VALIDATE_ENDPOINT, options).await?;
        normalize_one(&envelope)
    }

    pub async fn validate_or_raise(
        &self,
        options: &ValidateOptions,
    ) -> Result<PhoneNumberValidation, LoqateError> {
        Ok(unwrap_or_raise(self.validate(options).await?)?)
    }
}
