#![allow(dead_code)]

use serde::Deserialize;

/// Envelope wrapping every PlayFab Client API response, successful or not.
///
/// https://learn.microsoft.com/en-us/rest/api/playfab/client/
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponseModel<T> {
    /// HTTP status code, repeated in the body.
    pub(crate) code: u16,
    /// HTTP status text, e.g. "OK" or "BadRequest".
    pub(crate) status: String,
    /// Present on success.
    pub(crate) data: Option<T>,
    /// Present on failure: the PlayFab error name, e.g. "ReceiptAlreadyUsed".
    pub(crate) error: Option<String>,
    pub(crate) error_code: Option<i32>,
    pub(crate) error_message: Option<String>,
}

impl<T> ApiResponseModel<T> {
    pub(crate) fn is_error(&self) -> bool {
        self.error.is_some() || self.data.is_none()
    }

    pub(crate) fn error_report(&self) -> String {
        match (&self.error, &self.error_message) {
            (Some(error), Some(message)) => format!("{error}: {message}"),
            (Some(error), None) => error.clone(),
            (None, Some(message)) => message.clone(),
            (None, None) => format!("{} {}", self.code, self.status),
        }
    }
}

/// Result of both receipt validation calls.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub struct ValidatePurchaseResultModel {
    /// Items granted for the validated purchase. Empty when the catalog has no
    /// matching item or the title does not use fulfillment.
    #[serde(default)]
    pub(crate) fulfillments: Vec<PurchaseReceiptFulfillmentModel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct PurchaseReceiptFulfillmentModel {
    #[serde(default)]
    pub(crate) fulfilled_items: Vec<ItemInstanceModel>,
    pub(crate) recorded_price_source: Option<String>,
    pub(crate) recorded_transaction_currency: Option<String>,
    pub(crate) recorded_transaction_total: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(crate) struct ItemInstanceModel {
    pub(crate) item_id: Option<String>,
    pub(crate) item_instance_id: Option<String>,
    pub(crate) catalog_version: Option<String>,
}
