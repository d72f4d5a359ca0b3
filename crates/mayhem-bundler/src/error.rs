use thiserror::Error;

use crate::provider::ProviderError;

/// Bundler failure taxonomy.
///
/// All three kinds are fail-fast and non-recoverable at this layer; retry
/// and rebroadcast policy belongs to the calling application.
#[derive(Debug, Error)]
pub enum BundlerError {
    /// Caller-supplied parameters violate a local constraint. Always
    /// detected before any network call.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A network-state read failed. The whole operation fails atomically;
    /// no partial envelope is returned.
    #[error("network request failed: {message}")]
    Network {
        message: String,
        #[source]
        source: ProviderError,
    },

    /// The submission adapter rejected or failed to confirm the
    /// transaction. The core performs no rebroadcast.
    #[error("transaction submission failed: {message}")]
    Submission {
        message: String,
        #[source]
        source: ProviderError,
    },
}

// Wire-level failures reachable from the bundler all originate in
// caller-supplied material (keys, signers, addresses), so they surface as
// validation failures.
impl From<sol_wire::WireError> for BundlerError {
    fn from(err: sol_wire::WireError) -> Self {
        BundlerError::Validation(err.to_string())
    }
}
