use serde::Serialize;

/// Request body of Client/ValidateIOSReceipt.
///
/// https://learn.microsoft.com/en-us/rest/api/playfab/client/platform-specific-methods/validate-ios-receipt
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateIosReceiptRequestModel {
    pub(crate) currency_code: String,
    /// Amount of the stated currency paid, in minor units.
    pub(crate) purchase_price: u32,
    /// Base64 encoded receipt data, passed back by the App Store as a result
    /// of a successful purchase.
    pub(crate) receipt_data: String,
}
