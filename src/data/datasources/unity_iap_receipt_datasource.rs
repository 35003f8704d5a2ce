use serde::de::DeserializeOwned;

use crate::{
    data::models::unity_iap::{
        app_store_receipt_model::AppStoreReceiptModel,
        google_play_receipt_model::{
            GooglePlayPayloadModel, GooglePlayPurchaseDataModel, GooglePlayReceiptModel,
            PurchaseState,
        },
    },
    domain::entities::{
        normalized_payload::{GooglePlayPurchaseData, GooglePlayPurchaseState, NormalizedPayload},
        purchase_receipt::{Platform, PurchaseReceipt},
    },
    errors::DecodeError,
};

/// Unwraps the receipt envelope produced by the purchasing plugin into the
/// platform payload the validation authority expects.
///
/// Pure: never touches the network and never panics, whatever the input.
pub fn decode(receipt: &PurchaseReceipt) -> Result<NormalizedPayload, DecodeError> {
    if receipt.raw.is_empty() {
        return Err(DecodeError::EmptyReceipt);
    }
    match receipt.platform {
        Platform::Android => decode_google_play(&receipt.raw),
        Platform::Ios => decode_app_store(&receipt.raw),
    }
}

fn decode_google_play(raw: &str) -> Result<NormalizedPayload, DecodeError> {
    let envelope: GooglePlayReceiptModel = parse_level(raw, "receipt envelope")?;
    tracing::trace!(store = %envelope.store, transaction_id = ?envelope.transaction_id, "decoding Google Play receipt");
    let payload: GooglePlayPayloadModel = parse_level(&envelope.payload, "receipt payload")?;
    // The authority only needs `json` and `signature`; the record inside is
    // informational.
    let purchase_data = match parse_level::<GooglePlayPurchaseDataModel>(
        &payload.json,
        "purchase data",
    ) {
        Ok(model) => Some(model.into()),
        Err(e) => {
            tracing::warn!(error = %e, "purchase data unreadable, forwarding receipt as-is");
            None
        }
    };
    Ok(NormalizedPayload::google_play(
        payload.json,
        payload.signature,
        purchase_data,
    ))
}

fn decode_app_store(raw: &str) -> Result<NormalizedPayload, DecodeError> {
    let envelope: AppStoreReceiptModel = parse_level(raw, "receipt envelope")?;
    tracing::trace!(store = %envelope.store, transaction_id = ?envelope.transaction_id, "decoding App Store receipt");
    Ok(NormalizedPayload::ios(envelope.payload))
}

fn parse_level<T: DeserializeOwned>(data: &str, level: &str) -> Result<T, DecodeError> {
    serde_json::from_str(data)
        .map_err(|e| DecodeError::MalformedReceipt(format!("{level}: {e}")))
}

impl From<GooglePlayPurchaseDataModel> for GooglePlayPurchaseData {
    fn from(m: GooglePlayPurchaseDataModel) -> Self {
        Self {
            order_id: m.order_id,
            package_name: m.package_name,
            product_id: m.product_id,
            purchase_time: m.purchase_time,
            purchase_state: match m.purchase_state {
                PurchaseState::Purchased => GooglePlayPurchaseState::Purchased,
                PurchaseState::Canceled => GooglePlayPurchaseState::Canceled,
                PurchaseState::Pending => GooglePlayPurchaseState::Pending,
            },
            purchase_token: m.purchase_token,
        }
    }
}
