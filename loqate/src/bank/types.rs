//! Bank account and card validation types.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::mapper::Shape;

/// Outcome of a UK account validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum StatusInformation {
    /// The details are valid but should be double-checked.
    #[serde(rename = "CautiousOK")]
    #[strum(serialize = "CautiousOK")]
    CautiousOk,
    /// The details were corrected; see the `corrected_*` fields.
    DetailsChanged,
    /// The details are valid.
    #[serde(rename = "OK")]
    #[strum(serialize = "OK")]
    Ok,
}

/// Result of validating a single UK account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountValidation {
    pub is_correct: bool,
    pub is_direct_debit_capable: bool,
    pub status_information: StatusInformation,
    pub corrected_sort_code: String,
    pub corrected_account_number: String,
    pub iban: String,
    pub bank: String,
    pub bank_bic: String,
    pub branch: String,
    pub branch_bic: String,
    pub contact_address_line1: String,
    pub contact_address_line2: String,
    pub contact_post_town: String,
    pub contact_postcode: String,
    pub contact_phone: String,
    pub contact_fax: String,
}

impl AccountValidation {
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl Shape for AccountValidation {
    const NAME: &'static str = "AccountValidation";
}

/// Result of validating one account in a batch.
///
/// Carries the details as submitted alongside the validation outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchAccountValidation {
    pub original_account_number: String,
    pub original_sort_code: String,
    pub is_correct: bool,
    pub is_direct_debit_capable: bool,
    pub status_information: StatusInformation,
    pub corrected_sort_code: String,
    pub corrected_account_number: String,
    pub iban: String,
    pub bank: String,
    pub bank_bic: String,
    pub branch: String,
    pub branch_bic: String,
    pub contact_address_line1: String,
    pub contact_address_line2: String,
    pub contact_post_town: String,
    pub contact_postcode: String,
    pub contact_phone: String,
    pub contact_fax: String,
}

impl BatchAccountValidation {
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl Shape for BatchAccountValidation {
    const NAME: &'static str = "BatchAccountValidation";
}

/// Result of validating an IBAN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternationalAccountValidation {
    pub is_correct: bool,
}

impl InternationalAccountValidation {
    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl Shape for InternationalAccountValidation {
    const NAME: &'static str = "InternationalAccountValidation";
}

/// Result of validating a payment card number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardValidation {
    /// The card number, with spaces and dashes removed.
    pub card_number: String,
    /// Card scheme, e.g. `VISA` or `MASTERCARD`.
    pub card_type: String,
}

impl Shape for CardValidation {
    const NAME: &'static str = "CardValidation";
}

/// Bank branch details for a sort code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branch {
    pub bank: String,
    pub bank_bic: String,
    pub branch: String,
    pub branch_bic: String,
    pub contact_address_line1: String,
    pub contact_address_line2: String,
    pub contact_post_town: String,
    pub contact_postcode: String,
    pub contact_phone: String,
    pub contact_fax: String,
    pub faster_payments_supported: bool,
    pub chaps_supported: bool,
}

impl Shape for Branch {
    const NAME: &'static str = "Branch";
}

/// Options for validating several UK accounts at once. Entries pair up by
/// position.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchValidateAccountsOptions {
    pub account_numbers: Vec<String>,
    pub sort_codes: Vec<String>,
}

impl BatchValidateAccountsOptions {
    /// Builds the options from `(account_number, sort_code)` pairs.
    pub fn from_pairs<I, A, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, S)>,
        A: Into<String>,
        S: Into<String>,
    {
        let (account_numbers, sort_codes) = pairs
            .into_iter()
            .map(|(account, sort_code)| (account.into(), sort_code.into()))
            .unzip();
        Self {
            account_numbers,
            sort_codes,
        }
    }
}

/// Options for validating a single UK account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateAccountOptions {
    pub account_number: String,
    pub sort_code: String,
}

impl ValidateAccountOptions {
    pub fn new(account_number: impl Into<String>, sort_code: impl Into<String>) -> Self {
        Self {
            account_number: account_number.into(),
            sort_code: sort_code.into(),
        }
    }
}

/// Options for validating an IBAN.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateInternationalAccountOptions {
    pub iban: String,
}

/// Options for looking up a branch by sort code.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RetrieveBySortcodeOptions {
    pub sort_code: String,
}

/// Options for validating a payment card.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidateCardOptions {
    pub card_number: String,
}
