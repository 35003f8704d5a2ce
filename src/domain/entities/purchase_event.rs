/// What the purchasing plugin hands over when a purchase completes.
#[derive(Debug, Clone)]
pub struct PurchaseEvent {
    /// `None` when the plugin could not match the purchase to a registered
    /// product.
    pub purchased_product: Option<PurchasedProduct>,
}

#[derive(Debug, Clone)]
pub struct PurchasedProduct {
    pub product_id: String,
    pub receipt: String,
    pub metadata: ProductMetadata,
    pub transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct ProductMetadata {
    /// ISO 4217 code, e.g. "USD".
    pub iso_currency_code: String,
    /// Price in major units as shown to the user, e.g. 4.99.
    pub localized_price: f64,
}

/// Purchase facts that travel next to the receipt, independent of its body.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseMetadata {
    pub currency_code: String,
    pub localized_price: f64,
    pub transaction_id: String,
}

impl From<&PurchasedProduct> for PurchaseMetadata {
    fn from(product: &PurchasedProduct) -> Self {
        Self {
            currency_code: product.metadata.iso_currency_code.clone(),
            localized_price: product.metadata.localized_price,
            transaction_id: product.transaction_id.clone(),
        }
    }
}

/// Returned to the purchasing plugin from `on_process_purchase`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurchaseProcessingResult {
    Complete,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitializationFailureReason {
    PurchasingUnavailable,
    NoProductsAvailable,
    AppNotKnown,
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseFailureReason {
    PurchasingUnavailable,
    ExistingPurchasePending,
    ProductUnavailable,
    SignatureInvalid,
    UserCancelled,
    PaymentDeclined,
    DuplicateTransaction,
    Unknown,
}

/// Store-facing identity of a product that failed to purchase.
#[derive(Debug, Clone)]
pub struct ProductDefinition {
    pub id: String,
    pub store_specific_id: String,
}
