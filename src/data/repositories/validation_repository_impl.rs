use async_trait::async_trait;

use crate::{
    config::PlayFabConfig,
    data::{
        datasources::playfab_client_api_datasource::{
            PlayFabClientApiDatasource, PlayFabClientApiDatasourceImpl,
        },
        models::playfab_client_api::{
            common::{ApiResponseModel, ValidatePurchaseResultModel},
            validate_google_play_purchase_model::ValidateGooglePlayPurchaseRequestModel,
            validate_ios_receipt_model::ValidateIosReceiptRequestModel,
        },
    },
    domain::{
        entities::{
            validation_outcome::ValidationOutcome,
            validation_request::{GooglePlayRequest, IosRequest, ValidationRequest},
        },
        repositories::validation_repository::ValidationRepository,
    },
    errors::TransportError,
};

pub struct ValidationRepositoryImpl<D: PlayFabClientApiDatasource> {
    playfab_client_api_datasource: D,
}

#[async_trait]
impl<D: PlayFabClientApiDatasource> ValidationRepository for ValidationRepositoryImpl<D> {
    async fn validate(
        &self,
        request: ValidationRequest,
    ) -> Result<ValidationOutcome, TransportError> {
        let response = match request {
            ValidationRequest::GooglePlay(r) => {
                self.playfab_client_api_datasource
                    .validate_google_play_purchase(&r.into())
                    .await?
            }
            ValidationRequest::Ios(r) => {
                self.playfab_client_api_datasource
                    .validate_ios_receipt(&r.into())
                    .await?
            }
        };
        Ok(ValidationOutcome::from_playfab_response(response))
    }
}

impl ValidationRepositoryImpl<PlayFabClientApiDatasourceImpl> {
    pub(crate) fn new(config: &PlayFabConfig) -> Self {
        Self::with_datasource(PlayFabClientApiDatasourceImpl::new(config))
    }
}

impl<D: PlayFabClientApiDatasource> ValidationRepositoryImpl<D> {
    pub(crate) fn with_datasource(playfab_client_api_datasource: D) -> Self {
        Self {
            playfab_client_api_datasource,
        }
    }
}

impl ValidationOutcome {
    fn from_playfab_response(response: ApiResponseModel<ValidatePurchaseResultModel>) -> Self {
        if response.is_error() {
            return ValidationOutcome::Failure(response.error_report());
        }
        let fulfilled_items: Vec<&str> = response
            .data
            .iter()
            .flat_map(|d| d.fulfillments.iter())
            .flat_map(|f| f.fulfilled_items.iter())
            .filter_map(|i| i.item_id.as_deref())
            .collect();
        tracing::debug!(?fulfilled_items, "receipt accepted by validation authority");
        ValidationOutcome::Success
    }
}

impl From<GooglePlayRequest> for ValidateGooglePlayPurchaseRequestModel {
    fn from(r: GooglePlayRequest) -> Self {
        Self {
            currency_code: r.currency_code,
            purchase_price: r.price_minor_units,
            receipt_json: r.receipt_json,
            signature: r.signature,
        }
    }
}

impl From<IosRequest> for ValidateIosReceiptRequestModel {
    fn from(r: IosRequest) -> Self {
        Self {
            currency_code: r.currency_code,
            purchase_price: r.price_minor_units,
            receipt_data: r.receipt_data,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    /// Answers every call with the configured result and records which
    /// endpoint was hit.
    struct PlayFabClientApiDatasourceMock {
        response: fn() -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError>,
        calls: Mutex<Vec<String>>,
    }

    impl PlayFabClientApiDatasourceMock {
        fn new(
            response: fn() -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError>,
        ) -> Self {
            Self {
                response,
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PlayFabClientApiDatasource for PlayFabClientApiDatasourceMock {
        async fn validate_google_play_purchase(
            &self,
            request: &ValidateGooglePlayPurchaseRequestModel,
        ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("google:{}", request.purchase_price));
            (self.response)()
        }

        async fn validate_ios_receipt(
            &self,
            request: &ValidateIosReceiptRequestModel,
        ) -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
            self.calls
                .lock()
                .unwrap()
                .push(format!("ios:{}", request.purchase_price));
            (self.response)()
        }
    }

    fn ok_envelope() -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
        Ok(ApiResponseModel {
            code: 200,
            status: "OK".to_string(),
            data: Some(ValidatePurchaseResultModel::default()),
            error: None,
            error_code: None,
            error_message: None,
        })
    }

    fn error_envelope() -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
        Ok(ApiResponseModel {
            code: 400,
            status: "BadRequest".to_string(),
            data: None,
            error: Some("InvalidReceipt".to_string()),
            error_code: Some(1001),
            error_message: None,
        })
    }

    fn unreachable() -> Result<ApiResponseModel<ValidatePurchaseResultModel>, TransportError> {
        Err(TransportError::AuthorityUnreachable("dns".to_string()))
    }

    fn ios_request() -> ValidationRequest {
        ValidationRequest::Ios(IosRequest {
            currency_code: "USD".to_string(),
            price_minor_units: 99,
            receipt_data: "TUlJ".to_string(),
        })
    }

    #[tokio::test]
    async fn accepted_receipt_is_a_success() {
        let repository =
            ValidationRepositoryImpl::with_datasource(PlayFabClientApiDatasourceMock::new(ok_envelope));
        let outcome = repository.validate(ios_request()).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Success);
    }

    #[tokio::test]
    async fn error_envelope_is_a_failure_verdict() {
        let repository = ValidationRepositoryImpl::with_datasource(
            PlayFabClientApiDatasourceMock::new(error_envelope),
        );
        let outcome = repository.validate(ios_request()).await.unwrap();
        assert_eq!(outcome, ValidationOutcome::Failure("InvalidReceipt".to_string()));
    }

    #[tokio::test]
    async fn transport_errors_surface_unchanged() {
        let repository =
            ValidationRepositoryImpl::with_datasource(PlayFabClientApiDatasourceMock::new(unreachable));
        let err = repository.validate(ios_request()).await.unwrap_err();
        assert_eq!(err, TransportError::AuthorityUnreachable("dns".to_string()));
    }

    #[tokio::test]
    async fn routes_each_store_to_its_endpoint_once() {
        let repository =
            ValidationRepositoryImpl::with_datasource(PlayFabClientApiDatasourceMock::new(ok_envelope));
        repository.validate(ios_request()).await.unwrap();
        repository
            .validate(ValidationRequest::GooglePlay(GooglePlayRequest {
                currency_code: "USD".to_string(),
                price_minor_units: 499,
                receipt_json: "{}".to_string(),
                signature: "sig1".to_string(),
            }))
            .await
            .unwrap();
        assert_eq!(
            *repository.playfab_client_api_datasource.calls.lock().unwrap(),
            vec!["ios:99".to_string(), "google:499".to_string()]
        );
    }
}
