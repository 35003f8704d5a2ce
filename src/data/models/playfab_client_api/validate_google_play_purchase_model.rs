use serde::Serialize;

/// Request body of Client/ValidateGooglePlayPurchase.
///
/// https://learn.microsoft.com/en-us/rest/api/playfab/client/platform-specific-methods/validate-google-play-purchase
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateGooglePlayPurchaseRequestModel {
    /// Currency used to pay for the purchase (ISO 4217).
    pub(crate) currency_code: String,
    /// Amount of the stated currency paid, in minor units.
    pub(crate) purchase_price: u32,
    /// Original JSON string returned by the Google Play IAB API.
    pub(crate) receipt_json: String,
    /// Signature returned by the Google Play IAB API.
    pub(crate) signature: String,
}
