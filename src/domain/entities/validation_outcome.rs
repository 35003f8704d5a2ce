use std::fmt;

use crate::errors::{DecodeError, PurchaseFlowError};

/// Verdict returned by the validation authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Success,
    Failure(String),
}

/// Stages a single purchase event moves through. Terminal states are
/// `Validated`, `Rejected` and `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    ReceiptReceived,
    Decoded,
    RequestBuilt,
    Validating,
    Validated,
    Rejected,
    Failed,
}

impl FlowState {
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            FlowState::Validated | FlowState::Rejected | FlowState::Failed
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    UnknownProduct,
    NoReceipt,
    StoreNotInitialized,
}

/// The one user-visible status produced for a purchase event (or a store
/// lifecycle callback).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservableStatus {
    Validated,
    Rejected(String),
    Failed(String),
    Ignored(IgnoreReason),
    InitializeFailed(String),
    PurchaseFailed { product: String, reason: String },
}

impl ObservableStatus {
    pub fn from_outcome(outcome: &Result<ValidationOutcome, PurchaseFlowError>) -> Self {
        match outcome {
            Ok(ValidationOutcome::Success) => ObservableStatus::Validated,
            Ok(ValidationOutcome::Failure(reason)) => ObservableStatus::Rejected(reason.clone()),
            Err(PurchaseFlowError::UnknownProduct) => {
                ObservableStatus::Ignored(IgnoreReason::UnknownProduct)
            }
            Err(PurchaseFlowError::StoreNotInitialized) => {
                ObservableStatus::Ignored(IgnoreReason::StoreNotInitialized)
            }
            Err(PurchaseFlowError::Decode(DecodeError::EmptyReceipt)) => {
                ObservableStatus::Ignored(IgnoreReason::NoReceipt)
            }
            Err(e) => ObservableStatus::Failed(e.to_string()),
        }
    }

    /// Terminal flow state, for statuses that close a purchase event that
    /// reached the decoder. Short-circuited and lifecycle statuses have none.
    pub fn flow_state(&self) -> Option<FlowState> {
        match self {
            ObservableStatus::Validated => Some(FlowState::Validated),
            ObservableStatus::Rejected(_) => Some(FlowState::Rejected),
            ObservableStatus::Failed(_) => Some(FlowState::Failed),
            ObservableStatus::Ignored(_)
            | ObservableStatus::InitializeFailed(_)
            | ObservableStatus::PurchaseFailed { .. } => None,
        }
    }
}

impl fmt::Display for ObservableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObservableStatus::Validated => write!(f, "validated"),
            ObservableStatus::Rejected(reason) => write!(f, "rejected: {reason}"),
            ObservableStatus::Failed(error) => write!(f, "failed: {error}"),
            ObservableStatus::Ignored(IgnoreReason::UnknownProduct) => {
                write!(f, "ignored: unknown product")
            }
            ObservableStatus::Ignored(IgnoreReason::NoReceipt) => write!(f, "ignored: no receipt"),
            ObservableStatus::Ignored(IgnoreReason::StoreNotInitialized) => {
                write!(f, "ignored: store not initialized")
            }
            ObservableStatus::InitializeFailed(reason) => write!(f, "initialize failed: {reason}"),
            ObservableStatus::PurchaseFailed { product, reason } => {
                write!(f, "purchase failed: '{product}': {reason}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::*;

    use super::*;
    use crate::errors::TransportError;

    #[rstest]
    #[case(Ok(ValidationOutcome::Success), "validated")]
    #[case(
        Ok(ValidationOutcome::Failure("ReceiptAlreadyUsed".into())),
        "rejected: ReceiptAlreadyUsed"
    )]
    #[case(Err(PurchaseFlowError::UnknownProduct), "ignored: unknown product")]
    #[case(Err(DecodeError::EmptyReceipt.into()), "ignored: no receipt")]
    #[case(
        Err(PurchaseFlowError::StoreNotInitialized),
        "ignored: store not initialized"
    )]
    #[case(
        Err(DecodeError::MalformedReceipt("missing field `Payload`".into()).into()),
        "failed: malformed receipt: missing field `Payload`"
    )]
    #[case(
        Err(TransportError::AuthorityUnreachable("connection refused".into()).into()),
        "failed: validation authority unreachable: connection refused"
    )]
    fn maps_every_terminal_outcome(
        #[case] outcome: Result<ValidationOutcome, PurchaseFlowError>,
        #[case] expected: &str,
    ) {
        assert_eq!(ObservableStatus::from_outcome(&outcome).to_string(), expected);
    }

    #[test]
    fn flow_state_is_terminal_when_present() {
        for status in [
            ObservableStatus::Validated,
            ObservableStatus::Rejected("x".into()),
            ObservableStatus::Failed("y".into()),
        ] {
            assert!(status.flow_state().unwrap().is_terminal());
        }
        assert_eq!(
            ObservableStatus::Ignored(IgnoreReason::NoReceipt).flow_state(),
            None
        );
        assert!(!FlowState::Validating.is_terminal());
    }
}
