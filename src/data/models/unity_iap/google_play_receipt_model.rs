#![allow(dead_code)]

use chrono::serde::ts_milliseconds;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_repr::Deserialize_repr;

/// Receipt envelope produced by Unity IAP for Google Play purchases.
///
/// https://docs.unity3d.com/Manual/UnityIAPPurchaseReceipts.html
///
/// Field names are case-sensitive and must match exactly.
#[derive(Debug, Deserialize)]
pub(crate) struct GooglePlayReceiptModel {
    /// Name of the store, "GooglePlay" on device, "fake" in the editor.
    #[serde(rename = "Store")]
    pub(crate) store: String,
    /// Store-specific transaction identifier (the order id on Google Play).
    #[serde(rename = "TransactionID")]
    pub(crate) transaction_id: Option<String>,
    /// JSON-encoded [`GooglePlayPayloadModel`].
    #[serde(rename = "Payload")]
    pub(crate) payload: String,
}

/// Payload of a Google Play receipt: the purchase data as signed by Google,
/// together with its signature.
#[derive(Debug, Deserialize, Serialize, PartialEq)]
pub(crate) struct GooglePlayPayloadModel {
    /// JSON-encoded [`GooglePlayPurchaseDataModel`]. Must be forwarded
    /// byte-for-byte, since the signature covers this exact string.
    pub(crate) json: String,
    /// Base64-encoded RSA signature of `json`.
    pub(crate) signature: String,
}

/// Purchase data as signed by Google Play.
///
/// https://developer.android.com/google/play/billing/integrate
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GooglePlayPurchaseDataModel {
    /// Absent for test purchases and promo-code redemptions.
    pub(crate) order_id: Option<String>,
    pub(crate) package_name: String,
    pub(crate) product_id: String,
    /// The time the product was purchased, in milliseconds since the epoch.
    #[serde(with = "ts_milliseconds")]
    pub(crate) purchase_time: DateTime<Utc>,
    pub(crate) purchase_state: PurchaseState,
    pub(crate) purchase_token: String,
}

#[derive(Debug, Deserialize_repr, PartialEq)]
#[repr(u8)]
pub(crate) enum PurchaseState {
    Purchased = 0,
    Canceled = 1,
    Pending = 2,
}
