#![allow(dead_code)]

use serde::Deserialize;

/// Receipt envelope produced by Unity IAP for App Store purchases.
///
/// https://docs.unity3d.com/Manual/UnityIAPPurchaseReceipts.html
#[derive(Debug, Deserialize)]
pub(crate) struct AppStoreReceiptModel {
    #[serde(rename = "Store")]
    pub(crate) store: String,
    #[serde(rename = "TransactionID")]
    pub(crate) transaction_id: Option<String>,
    /// Base64-encoded ASN.1 App Store receipt. Not parsed here; the validation
    /// authority verifies it with Apple.
    #[serde(rename = "Payload")]
    pub(crate) payload: String,
}
