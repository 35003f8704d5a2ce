use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    config::PlayFabConfig,
    data::models::playfab_client_api::{
        common::{ApiResponseModel, ValidatePurchaseResultModel},
        validate_google_play_purchase_model::ValidateGooglePlayPurchaseRequestModel,
        validate_ios_receipt_model::ValidateIosReceiptRequestModel,
    },
    errors::TransportError,
};

const AUTHORIZATION_HEADER: &str = "X-Authorization";

#[async_trait]
pub trait PlayFabClientApiDatasource: Send + Sync {
    /// Client/ValidateGooglePlayPurchase:
    /// https://learn.microsoft.com/en-us/rest/api/playfab/client/platform-specific-methods/validate-google-play-purchase
    ///
    /// Returns the response envelope as-is; an error envelope is the
    /// authority's verdict, not a transport failure. Server errors, rate
    /// limiting and refused session tickets are transport failures.
    async fn validate_google_play_purchase(
        &self,
        request: &ValidateGooglePlayPurchaseRequestModel,
    ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError>;

    /// Client/ValidateIOSReceipt:
    /// https://learn.microsoft.com/en-us/rest/api/playfab/client/platform-specific-methods/validate-ios-receipt
    async fn validate_ios_receipt(
        &self,
        request: &ValidateIosReceiptRequestModel,
    ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError>;
}

pub struct PlayFabClientApiDatasourceImpl {
    client: reqwest::Client,
    base_url: String,
    session_ticket: String,
}

#[async_trait]
impl PlayFabClientApiDatasource for PlayFabClientApiDatasourceImpl {
    async fn validate_google_play_purchase(
        &self,
        request: &ValidateGooglePlayPurchaseRequestModel,
    ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
        self.callout("ValidateGooglePlayPurchase", request).await
    }

    async fn validate_ios_receipt(
        &self,
        request: &ValidateIosReceiptRequestModel,
    ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
        self.callout("ValidateIOSReceipt", request).await
    }
}

impl PlayFabClientApiDatasourceImpl {
    pub(crate) fn new(config: &PlayFabConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    pub(crate) fn with_client(config: &PlayFabConfig, client: reqwest::Client) -> Self {
        Self {
            client,
            base_url: config.base_url(),
            session_ticket: config.session_ticket.clone(),
        }
    }

    fn url(&self, function_name: &str) -> String {
        format!("{}/Client/{function_name}", self.base_url)
    }

    async fn callout<B: Serialize + Sync, T: DeserializeOwned + Send>(
        &self,
        function_name: &str,
        body: &B,
    ) -> Result<ApiResponseModel<T>, TransportError> {
        let response = self
            .client
            .post(self.url(function_name))
            .header(AUTHORIZATION_HEADER, &self.session_ticket)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                TransportError::AuthorityUnreachable(format!(
                    "{function_name}; callout failed to send; {e}"
                ))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            TransportError::AuthorityUnreachable(format!(
                "{function_name}; failed to read callout response; {e}"
            ))
        })?;
        parse_response(function_name, status, &text)
    }
}

/// PlayFab reports validation verdicts as error envelopes with a 4xx status,
/// so those envelopes are handed back as-is. Outages, rate limiting and
/// refused credentials never carry a verdict on the receipt, even when the
/// body is a well-formed envelope.
fn parse_response<T: DeserializeOwned>(
    function_name: &str,
    status: StatusCode,
    text: &str,
) -> Result<ApiResponseModel<T>, TransportError> {
    if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
        return Err(TransportError::AuthorityUnreachable(format!(
            "{function_name}; callout returned with {status} status code; {text}"
        )));
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(TransportError::AuthorityRejected(format!(
            "{function_name}; callout returned with {status} status code; {text}"
        )));
    }
    match serde_json::from_str::<ApiResponseModel<T>>(text) {
        Ok(envelope) => Ok(envelope),
        Err(e) if status.is_success() => Err(TransportError::AuthorityRejected(format!(
            "{function_name}; failed to parse callout response; {e}"
        ))),
        Err(_) => Err(TransportError::AuthorityRejected(format!(
            "{function_name}; callout returned with {status} status code; {text}"
        ))),
    }
}
