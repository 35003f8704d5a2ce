use async_trait::async_trait;

use crate::{
    domain::entities::{validation_outcome::ValidationOutcome, validation_request::ValidationRequest},
    errors::TransportError,
};

/// Remote authority able to verify a receipt with the platform vendor.
///
/// One call is one round trip: implementations do not retry and do not time
/// out on their own.
#[async_trait]
pub trait ValidationRepository: Send + Sync {
    async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationOutcome, TransportError>;
}

#[async_trait]
impl<T: ValidationRepository + ?Sized> ValidationRepository for std::sync::Arc<T> {
    async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationOutcome, TransportError> {
        (**self).validate(request).await
    }
}
