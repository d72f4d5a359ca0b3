use thiserror::Error;

/// Errors from Solana wire-format operations.
#[derive(Debug, Error)]
pub enum WireError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("no valid program-derived address for the given seeds")]
    PdaNotFound,

    #[error("transaction build error: {0}")]
    TransactionBuild(String),

    #[error("signing error: {0}")]
    Signing(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}
