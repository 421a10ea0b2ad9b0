//! Bank account, IBAN and payment card validation.

mod types;

pub use types::{
    AccountValidation, BatchAccountValidation, BatchValidateAccountsOptions, Branch,
    CardValidation, InternationalAccountValidation, RetrieveBySortcodeOptions, StatusInformation,
    ValidateAccountOptions, ValidateCardOptions, ValidateInternationalAccountOptions,
};

use crate::client::Transport;
use crate::error::{LoqateError, SchemaViolation};
use crate::gateway::fetch;
use crate::normalize::{normalize_many, normalize_one, normalize_optional};
use crate::result::{unwrap_or_raise, ApiResult};

pub const BATCH_VALIDATE_ACCOUNTS_ENDPOINT: &str = "/BankAccountValidation/Batch/Validate/v1/json3.ws";
pub const VALIDATE_ACCOUNT_ENDPOINT: &str = "/BankAccountValidation/Interactive/Validate/v2/json3.ws";
pub const VALIDATE_INTERNATIONAL_ACCOUNT_ENDPOINT: &str =
    "/InternationalBankValidation/Interactive/Validate/v1/json3.ws";
pub const RETRIEVE_BY_SORTCODE_ENDPOINT: &str =
    "/BankAccountValidation/Interactive/RetrieveBySortcode/v1.00/json3.ws";
pub const VALIDATE_CARD_ENDPOINT: &str = "/CardValidation/Interactive/Validate/v1/json3.ws";

/// Gateway to the bank and card validation services.
#[derive(Debug)]
pub struct BankGateway<'a, T: Transport> {
    transport: &'a T,
}

impl<'a, T: Transport> BankGateway<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Validates several UK accounts in one request.
    pub async fn batch_validate_accounts(
        &self,
        options: &BatchValidateAccountsOptions,
    ) -> Result<ApiResult<Vec<BatchAccountValidation>>, SchemaViolation> {
        let envelope = fetch(
            self.transport,
            "bank.batch_validate_accounts",
            BATCH_VALIDATE_ACCOUNTS_ENDPOINT,
            options,
        )
        .await?;
        normalize_many(&envelope)
    }

    /// Validates a UK account number and sort code.
    pub async fn validate_account(
        &self,
        options: &ValidateAccountOptions,
    ) -> Result<ApiResult<AccountValidation>, SchemaViolation> {
        let envelope = fetch(
            self.transport,
            "bank.validate_account",
            VALIDATE_ACCOUNT_ENDPOINT,
            options,
        )
        .await?;
        normalize_one(&envelope)
    }

    /// Validates an IBAN.
    pub async fn validate_international_account(
        &self,
        options: &ValidateInternationalAccountOptions,
    ) -> Result<ApiResult<InternationalAccountValidation>, SchemaViolation> {
        let envelope = fetch(
            self.transport,
            "bank.validate_international_account",
            VALIDATE_INTERNATIONAL_ACCOUNT_ENDPOINT,
            options,
        )
        .await?;
        normalize_one(&envelope)
    }

    /// Looks up the branch for a sort code. An unknown sort code yields
    /// `None`.
    pub async fn retrieve_by_sortcode(
        &self,
        options: &RetrieveBySortcodeOptions,
    ) -> Result<ApiResult<Option<Branch>>, SchemaViolation> {
        let envelope = fetch(
            self.transport,
            "bank.retrieve_by_sortcode",
            RETRIEVE_BY_SORTCODE_ENDPOINT,
            options,
        )
        .await?;
        normalize_optional(&envelope)
    }

    /// Validates a payment card number.
    pub async fn validate_card(
        &self,
        options: &ValidateCardOptions,
    ) -> Result<ApiResult<CardValidation>, SchemaViolation> {
        let envelope = fetch(self.transport, "bank.validate_card", VALIDATE_CARD_ENDPOINT, options).await?;
        normalize_one(&envelope)
    }

    pub async fn batch_validate_accounts_or_raise(
        &self,
        options: &BatchValidateAccountsOptions,
    ) -> Result<Vec<BatchAccountValidation>, LoqateError> {
        Ok(unwrap_or_raise(self.batch_validate_accounts(options).await?)?)
    }

    pub async fn validate_account_or_raise(
        &self,
        options: &ValidateAccountOptions,
    ) -> Result<AccountValidation, LoqateError> {
        Ok(unwrap_or_raise(self.validate_account(options).await?)?)
    }

    pub async fn validate_international_account_or_raise(
        &self,
        options: &ValidateInternationalAccountOptions,
    ) -> Result<InternationalAccountValidation, LoqateError> {
        Ok(unwrap_or_raise(self.validate_international_account(options).await?)?)
    }

    pub async fn retrieve_by_sortcode_or_raise(
        &self,
        options: &RetrieveBySortcodeOptions,
    ) -> Result<Option<Branch>, LoqateError> {
        Ok(unwrap_or_raise(self.retrieve_by_sortcode(options).await?)?)
    }

    pub async fn validate_card_or_raise(
        &self,
        options: &ValidateCardOptions,
    ) -> Result<CardValidation, LoqateError> {
        Ok(unwrap_or_raise(self.validate_card(options).await?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::testing::StubTransport;
    use serde_json::{json, Value};

    fn account_item(original: Option<(&str, &str)>) -> Value {
        let mut item = json!({
            "IsCorrect": true,
            "IsDirectDebitCapable": true,
            "StatusInformation": "OK",
            "CorrectedSortCode": "404131",
            "CorrectedAccountNumber": "41111111",
            "IBAN": "GB27MIDL40413141111111",
            "Bank": "HSBC BANK PLC",
            "BankBIC": "MIDLGB21",
            "Branch": "Test Branch",
            "BranchBIC": "12P",
            "ContactAddressLine1": "1 High Street",
            "ContactAddressLine2": "",
            "ContactPostTown": "London",
            "ContactPostcode": "EC1A 1AA",
            "ContactPhone": "0345 740 4404",
            "ContactFax": ""
        });
        if let (Some((account, sort_code)), Some(map)) = (original, item.as_object_mut()) {
            map.insert("OriginalAccountNumber".to_string(), json!(account));
            map.insert("OriginalSortCode".to_string(), json!(sort_code));
        }
        item
    }

    #[tokio::test]
    async fn batch_validate_accounts_maps_every_item() {
        let transport = StubTransport::returning(json!([
            account_item(Some(("41111111", "404131"))),
            account_item(Some(("51065718", "404131")))
        ]));
        let gateway = BankGateway::new(&transport);

        let options =
            BatchValidateAccountsOptions::from_pairs([("41111111", "404131"), ("51065718", "404131")]);
        let validations = gateway.batch_validate_accounts_or_raise(&options).await.unwrap();

        assert_eq!(validations.len(), 2);
        assert_eq!(validations[1].original_account_number, "51065718");
        assert_eq!(validations[0].iban, "GB27MIDL40413141111111");
        assert_eq!(transport.last_endpoint(), BATCH_VALIDATE_ACCOUNTS_ENDPOINT);
    }

    #[tokio::test]
    async fn validate_account_maps_status() {
        let transport = StubTransport::returning(json!([account_item(None)]));
        let gateway = BankGateway::new(&transport);

        let result = gateway
            .validate_account(&ValidateAccountOptions::new("41111111", "404131"))
            .await
            .unwrap();
        let validation = result.value().unwrap();

        assert!(validation.is_correct());
        assert_eq!(validation.status_information, StatusInformation::Ok);
        assert_eq!(transport.last_param("SortCode").as_deref(), Some("404131"));
        assert_eq!(transport.last_param("AccountNumber").as_deref(), Some("41111111"));
    }

    #[tokio::test]
    async fn validate_account_reports_missing_sort_code() {
        let transport = StubTransport::error("1001", "SortCode Required");
        let gateway = BankGateway::new(&transport);

        let result = gateway
            .validate_account(&ValidateAccountOptions::new("51065718", ""))
            .await
            .unwrap();
        assert_eq!(result.error().map(|e| e.description.as_str()), Some("SortCode Required"));
    }

    #[tokio::test]
    async fn validate_international_account() {
        let transport = StubTransport::returning(json!([{ "IsCorrect": false }]));
        let gateway = BankGateway::new(&transport);

        let options = ValidateInternationalAccountOptions {
            iban: "GB33BUKB20201555555555".to_string(),
        };
        let validation = gateway
            .validate_international_account_or_raise(&options)
            .await
            .unwrap();

        assert!(!validation.is_correct());
        assert_eq!(transport.last_param("Iban").as_deref(), Some("GB33BUKB20201555555555"));
    }

    #[tokio::test]
    async fn retrieve_by_sortcode_on_empty_is_none() {
        let transport = StubTransport::returning(json!([]));
        let gateway = BankGateway::new(&transport);

        let options = RetrieveBySortcodeOptions {
            sort_code: "000000".to_string(),
        };
        let branch = gateway.retrieve_by_sortcode_or_raise(&options).await.unwrap();
        assert_eq!(branch, None);
    }

    #[tokio::test]
    async fn validate_card_maps_type() {
        let transport = StubTransport::returning(json!([
            { "CardNumber": "4444333322221111", "CardType": "VISA" }
        ]));
        let gateway = BankGateway::new(&transport);

        let options = ValidateCardOptions {
            card_number: "4444 3333 2222 1111".to_string(),
        };
        let card = gateway.validate_card_or_raise(&options).await.unwrap();

        assert_eq!(card.card_type, "VISA");
        assert_eq!(transport.last_endpoint(), VALIDATE_CARD_ENDPOINT);
    }

    #[tokio::test]
    async fn validate_card_or_raise_surfaces_remote_error() {
        let transport = StubTransport::error("1002", "CardNumber Invalid");
        let gateway = BankGateway::new(&transport);

        let err = gateway
            .validate_card_or_raise(&ValidateCardOptions::default())
            .await
            .unwrap_err();
        assert!(matches!(err, LoqateError::Remote(ref e) if e.id == 1002));
    }
}
