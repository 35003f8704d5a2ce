use std::sync::Arc;

use crate::domain::entities::purchase_event::{
    InitializationFailureReason, ProductDefinition, PurchaseEvent, PurchaseFailureReason,
    PurchaseProcessingResult,
};

/// Handle to the purchasing plugin's store, handed over once initialization
/// succeeds.
pub trait StoreController: Send + Sync {
    fn initiate_purchase(&self, product_id: &str);
}

/// Callbacks the purchasing plugin dispatches during the store lifecycle.
pub trait StoreListener {
    fn on_initialized(&self, controller: Arc<dyn StoreController>);

    fn on_initialize_failed(&self, reason: InitializationFailureReason);

    fn on_purchase_failed(&self, product: &ProductDefinition, reason: PurchaseFailureReason);

    /// Must return promptly; validation of the receipt continues in the
    /// background and reports its own status.
    fn on_process_purchase(&self, event: PurchaseEvent) -> PurchaseProcessingResult;
}
