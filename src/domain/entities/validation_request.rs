use super::{
    normalized_payload::{NormalizedPayload, Store},
    purchase_event::PurchaseMetadata,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationRequest {
    GooglePlay(GooglePlayRequest),
    Ios(IosRequest),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GooglePlayRequest {
    pub currency_code: String,
    pub price_minor_units: u32,
    pub receipt_json: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IosRequest {
    pub currency_code: String,
    pub price_minor_units: u32,
    pub receipt_data: String,
}

impl ValidationRequest {
    pub fn build(payload: &NormalizedPayload, meta: &PurchaseMetadata) -> Self {
        let price_minor_units = to_minor_units(meta.localized_price);
        match payload.store() {
            Store::GooglePlay => ValidationRequest::GooglePlay(GooglePlayRequest {
                currency_code: meta.currency_code.clone(),
                price_minor_units,
                receipt_json: payload.payload_blob().to_string(),
                signature: payload.signature().unwrap_or_default().to_string(),
            }),
            Store::Ios => ValidationRequest::Ios(IosRequest {
                currency_code: meta.currency_code.clone(),
                price_minor_units,
                receipt_data: payload.payload_blob().to_string(),
            }),
        }
    }

    pub fn store(&self) -> Store {
        match self {
            ValidationRequest::GooglePlay(_) => Store::GooglePlay,
            ValidationRequest::Ios(_) => Store::Ios,
        }
    }
}

/// Price in minor units as the authority expects it: the localized price
/// times 100, truncated toward zero. Negative and NaN prices clamp to 0.
///
/// Assumes a currency with 100 minor units; other currencies are not
/// special-cased.
pub fn to_minor_units(localized_price: f64) -> u32 {
    (localized_price * 100.0) as u32
}
