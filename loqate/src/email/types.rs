//! Email validation types.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr, PickFirst};
use strum::{Display, EnumString};

use crate::mapper::Shape;

/// Outcome of validating a single address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum ResponseCode {
    Valid,
    /// The domain accepts mail for any mailbox, so the mailbox itself could
    /// not be verified.
    #[serde(rename = "Valid_CatchAll")]
    #[strum(serialize = "Valid_CatchAll")]
    ValidCatchAll,
    Invalid,
    Timeout,
}

/// Result of validating a single email address.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailValidation {
    pub response_code: ResponseCode,
    pub response_message: String,
    pub email_address: String,
    pub user_account: String,
    pub domain: String,
    pub is_disposable_or_temporary: bool,
    pub is_complainer_or_fraud_risk: bool,
    /// Seconds taken by the check.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub duration: f64,
}

impl EmailValidation {
    pub fn is_valid(&self) -> bool {
        self.response_code == ResponseCode::Valid
    }

    /// Whether the domain accepts mail, even if the mailbox is unverified.
    pub fn is_valid_domain(&self) -> bool {
        matches!(
            self.response_code,
            ResponseCode::Valid | ResponseCode::ValidCatchAll
        )
    }

    pub fn is_invalid(&self) -> bool {
        self.response_code == ResponseCode::Invalid
    }

    pub fn is_timeout(&self) -> bool {
        self.response_code == ResponseCode::Timeout
    }
}

impl Shape for EmailValidation {
    const NAME: &'static str = "EmailValidation";
}

/// Outcome of validating an address in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum BatchStatus {
    Valid,
    Invalid,
    Unknown,
    /// The server accepts all mail, so the mailbox could not be verified.
    #[serde(rename = "Accept_All")]
    #[strum(serialize = "Accept_All")]
    AcceptAll,
}

/// Result of validating one address in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEmailValidation {
    pub status: BatchStatus,
    pub email_address: String,
    pub account: String,
    pub domain: String,
    /// Spelled as the service spells it.
    pub is_disposible: bool,
    pub is_system_mailbox: bool,
}

impl BatchEmailValidation {
    pub fn is_valid(&self) -> bool {
        self.status == BatchStatus::Valid
    }

    pub fn is_invalid(&self) -> bool {
        self.status == BatchStatus::Invalid
    }

    pub fn is_unknown(&self) -> bool {
        self.status == BatchStatus::Unknown
    }

    pub fn is_unverified(&self) -> bool {
        self.status == BatchStatus::AcceptAll
    }
}

impl Shape for BatchEmailValidation {
    const NAME: &'static str = "BatchEmailValidation";
}

/// Options for [`EmailGateway::validate`](super::EmailGateway::validate).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateOptions {
    pub email: String,
    /// Milliseconds to wait for the mail server. The service default
    /// applies when unset.
    pub timeout: Option<u32>,
}

impl ValidateOptions {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            timeout: None,
        }
    }

    pub fn timeout(mut self, millis: u32) -> Self {
        self.timeout = Some(millis);
        self
    }
}

/// Options for [`EmailGateway::batch_validate`](super::EmailGateway::batch_validate).
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchValidateOptions {
    pub emails: Vec<String>,
}

impl BatchValidateOptions {
    pub fn new<I, S>(emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
        }
    }
}
