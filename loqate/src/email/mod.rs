//! Email address validation.

mod types;

pub use types::{
    BatchEmailValidation, BatchStatus, BatchValidateOptions, EmailValidation, ResponseCode,
    ValidateOptions,
};

use crate::client::Transport;
use crate::error::{LoqateError, SchemaViolation};
use crate::gateway::fetch;
use crate::normalize::{normalize_many, normalize_one};
use crate::result::{unwrap_or_raise, ApiResult};

pub const VALIDATE_ENDPOINT: &str = "/EmailValidation/Interactive/Validate/v2.00/json3.ws";
pub const BATCH_VALIDATE_ENDPOINT: &str = "/EmailValidation/Batch/Validate/v1.20/json3.ws";

/// Gateway to the email validation service.
///
/// ## Examples
///
/// ```rust,ignore
/// use loqate::email::ValidateOptions;
///
/// let validation = gateway
///     .email()
///     .validate_or_raise(&ValidateOptions::new("user@example.com"))
///     .await?;
///
/// if validation.is_valid_domain() {
///     println!("{} accepts mail", validation.domain);
/// }
/// ```
#[derive(Debug)]
pub struct EmailGateway<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> EmailGateway<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Validates a single email address.
    pub async fn validate(
        &self,
        options: &ValidateOptions,
    ) -> Result<ApiResult<EmailValidation>, SchemaViolation> {
        let envelope = fetch(self.transport, "email.validate", VALIDATE_ENDPOINT, options).await?;
        normalize_one(&envelope)
    }

    /// Validates several addresses in one request.
    pub async fn batch_validate(
        &self,
        options: &BatchValidateOptions,
    ) -> Result<ApiResult<Vec<BatchEmailValidation>>, SchemaViolation> {
        let envelope =
            fetch(self.transport, "email.batch_validate", BATCH_VALIDATE_ENDPOINT, options).await?;
        normalize_many(&envelope)
    }

    pub async fn validate_or_raise(
        &self,
        options: &ValidateOptions,
    ) -> Result<EmailValidation, LoqateError> {
        Ok(unwrap_or_raise(self.validate(options).await?)?)
    }

    pub async fn batch_validate_or_raise(
        &self,
        options: &BatchValidateOptions,
    ) -> Result<Vec<BatchEmailValidation>, LoqateError> {
        Ok(unwrap_or_raise(self.batch_validate(options).await?)?)
    }
}
