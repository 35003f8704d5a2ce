use std::sync::{Arc, RwLock};

use tokio::runtime::Handle;

use crate::{
    config::PlayFabConfig,
    data::{
        datasources::{
            playfab_client_api_datasource::PlayFabClientApiDatasourceImpl,
            unity_iap_receipt_datasource::decode,
        },
        repositories::validation_repository_impl::ValidationRepositoryImpl,
    },
    domain::{
        entities::{
            purchase_event::{
                InitializationFailureReason, ProductDefinition, PurchaseEvent,
                PurchaseFailureReason, PurchaseMetadata, PurchaseProcessingResult,
            },
            purchase_receipt::{Platform, PurchaseReceipt},
            validation_outcome::{FlowState, ObservableStatus, ValidationOutcome},
            validation_request::ValidationRequest,
        },
        repositories::{
            store_listener::{StoreController, StoreListener},
            validation_repository::ValidationRepository,
        },
    },
    errors::PurchaseFlowError,
    reporter::{ResultReporter, StatusSink},
};

/// Validates purchases reported by the purchasing plugin against the remote
/// validation authority, and reports one status per purchase.
pub struct IapValidationRelay<R: ValidationRepository, S: StatusSink> {
    platform: Platform,
    validation_repository: R,
    reporter: ResultReporter<S>,
    store_controller: RwLock<Option<Arc<dyn StoreController>>>,
}

impl<R: ValidationRepository, S: StatusSink> IapValidationRelay<R, S> {
    pub fn with_repository(platform: Platform, validation_repository: R, sink: S) -> Self {
        Self {
            platform,
            validation_repository,
            reporter: ResultReporter::new(sink),
            store_controller: RwLock::new(None),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn is_initialized(&self) -> bool {
        self.controller().is_some()
    }

    pub fn reporter(&self) -> &ResultReporter<S> {
        &self.reporter
    }

    pub fn into_sink(self) -> S {
        self.reporter.into_sink()
    }

    /// Starts a purchase through the store. The result arrives later through
    /// `on_process_purchase` or `on_purchase_failed`.
    pub fn buy_product(&self, product_id: &str) -> Result<(), PurchaseFlowError> {
        let controller = self
            .controller()
            .ok_or(PurchaseFlowError::StoreNotInitialized)?;
        tracing::debug!(%product_id, "initiating purchase");
        controller.initiate_purchase(product_id);
        Ok(())
    }

    /// Runs one purchase event to completion and emits its status.
    pub async fn process_purchase(&self, event: PurchaseEvent) -> ObservableStatus {
        let transaction_id = event
            .purchased_product
            .as_ref()
            .map(|p| p.transaction_id.clone());
        let outcome = self.validate_purchase(event).await;
        self.reporter.report(transaction_id.as_deref(), &outcome)
    }

    async fn validate_purchase(
        &self,
        event: PurchaseEvent,
    ) -> Result<ValidationOutcome, PurchaseFlowError> {
        if !self.is_initialized() {
            return Err(PurchaseFlowError::StoreNotInitialized);
        }
        let product = event
            .purchased_product
            .ok_or(PurchaseFlowError::UnknownProduct)?;
        let transaction_id = product.transaction_id.as_str();
        tracing::debug!(%transaction_id, state = ?FlowState::ReceiptReceived, product_id = %product.product_id, "processing purchase");

        let payload = decode(&PurchaseReceipt::new(self.platform, product.receipt.as_str()))?;
        tracing::debug!(%transaction_id, state = ?FlowState::Decoded, store = ?payload.store(), "receipt decoded");

        let request = ValidationRequest::build(&payload, &PurchaseMetadata::from(&product));
        tracing::debug!(%transaction_id, state = ?FlowState::RequestBuilt, "validation request built");

        tracing::debug!(%transaction_id, state = ?FlowState::Validating, "calling validation authority");
        Ok(self.validation_repository.validate(request).await?)
    }

    fn controller(&self) -> Option<Arc<dyn StoreController>> {
        self.store_controller
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl<S: StatusSink> IapValidationRelay<ValidationRepositoryImpl<PlayFabClientApiDatasourceImpl>, S> {
    /// Relay backed by the PlayFab Client API.
    pub fn new(platform: Platform, config: &PlayFabConfig, sink: S) -> Self {
        Self::with_repository(platform, ValidationRepositoryImpl::new(config), sink)
    }
}

impl<R, S> StoreListener for Arc<IapValidationRelay<R, S>>
where
    R: ValidationRepository + 'static,
    S: StatusSink + 'static,
{
    fn on_initialized(&self, controller: Arc<dyn StoreController>) {
        tracing::info!(platform = ?self.platform, "store initialized");
        *self
            .store_controller
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = Some(controller);
    }

    fn on_initialize_failed(&self, reason: InitializationFailureReason) {
        self.reporter
            .emit(None, ObservableStatus::InitializeFailed(format!("{reason:?}")));
    }

    fn on_purchase_failed(&self, product: &ProductDefinition, reason: PurchaseFailureReason) {
        self.reporter.emit(
            None,
            ObservableStatus::PurchaseFailed {
                product: product.store_specific_id.clone(),
                reason: format!("{reason:?}"),
            },
        );
    }

    // NOTE: Purchases left pending by a previous session are delivered here on
    // startup too, and are completed without being held back.
    fn on_process_purchase(&self, event: PurchaseEvent) -> PurchaseProcessingResult {
        match Handle::try_current() {
            Ok(handle) => {
                let relay = Arc::clone(self);
                handle.spawn(async move {
                    relay.process_purchase(event).await;
                });
            }
            Err(e) => {
                let transaction_id = event
                    .purchased_product
                    .as_ref()
                    .map(|p| p.transaction_id.as_str());
                self.reporter.emit(
                    transaction_id,
                    ObservableStatus::Failed(format!("no async runtime to validate on; {e}")),
                );
            }
        }
        PurchaseProcessingResult::Complete
    }
}
