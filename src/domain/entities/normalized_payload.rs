use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Store {
    Ios,
    GooglePlay,
}

/// Platform payload extracted from a receipt envelope. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPayload {
    store: Store,
    /// For Google Play, the signed purchase JSON exactly as it appeared in the
    /// receipt. For the App Store, the base64 receipt blob, untouched.
    payload_blob: String,
    signature: Option<String>,
    purchase_data: Option<GooglePlayPurchaseData>,
}

/// The purchase-state record nested inside a Google Play receipt.
#[derive(Debug, Clone, PartialEq)]
pub struct GooglePlayPurchaseData {
    pub order_id: Option<String>,
    pub package_name: String,
    pub product_id: String,
    pub purchase_time: DateTime<Utc>,
    pub purchase_state: GooglePlayPurchaseState,
    pub purchase_token: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GooglePlayPurchaseState {
    Purchased,
    Canceled,
    Pending,
}

impl NormalizedPayload {
    pub(crate) fn google_play(
        receipt_json: String,
        signature: String,
        purchase_data: Option<GooglePlayPurchaseData>,
    ) -> Self {
        Self {
            store: Store::GooglePlay,
            payload_blob: receipt_json,
            signature: Some(signature),
            purchase_data,
        }
    }

    pub(crate) fn ios(receipt_data: String) -> Self {
        Self {
            store: Store::Ios,
            payload_blob: receipt_data,
            signature: None,
            purchase_data: None,
        }
    }

    pub fn store(&self) -> Store {
        self.store
    }

    pub fn payload_blob(&self) -> &str {
        &self.payload_blob
    }

    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// The decoded purchase-state record. `None` for App Store payloads, and
    /// for Google Play payloads whose `json` is not a readable record; those
    /// are still forwarded as-is.
    pub fn purchase_data(&self) -> Option<&GooglePlayPurchaseData> {
        self.purchase_data.as_ref()
    }

    /// Raw bytes of the App Store receipt (an ASN.1 container). `None` for
    /// Google Play payloads or when the blob is not valid base64.
    pub fn blob_bytes(&self) -> Option<Vec<u8>> {
        match self.store {
            Store::Ios => STANDARD.decode(&self.payload_blob).ok(),
            Store::GooglePlay => None,
        }
    }
}
