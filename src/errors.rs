use thiserror::Error;

/// Failure to turn a raw purchasing-plugin receipt into a normalized payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("purchase has no receipt")]
    EmptyReceipt,
    #[error("malformed receipt: {0}")]
    MalformedReceipt(String),
}

/// Failure to obtain a verdict from the validation authority.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("validation authority unreachable: {0}")]
    AuthorityUnreachable(String),
    #[error("validation authority rejected the call: {0}")]
    AuthorityRejected(String),
}

/// Every way a single purchase event can end without a verdict.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PurchaseFlowError {
    #[error("purchase references an unknown product")]
    UnknownProduct,
    #[error("store is not initialized")]
    StoreNotInitialized,
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing {0}")]
    MissingValue(&'static str),
    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
}
