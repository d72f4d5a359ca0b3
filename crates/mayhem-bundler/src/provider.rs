//! External collaborator traits.
//!
//! The bundler fetches live network state and submits signed transactions
//! through these traits rather than owning an RPC client. Implementations
//! decide endpoint selection, timeouts and retries — the core surfaces
//! their failures once and never retries.

use async_trait::async_trait;

/// Opaque failure from a provider or adapter implementation. The bundler
/// wraps it into its own error taxonomy with the cause preserved.
pub type ProviderError = Box<dyn std::error::Error + Send + Sync>;

/// Live network state required to assemble a creation transaction.
///
/// Implementations must be safe for concurrent use: the bundler issues the
/// two reads concurrently and independent `create_coin` calls may share one
/// provider.
#[async_trait]
pub trait NetworkStateProvider: Send + Sync {
    /// Minimum lamport balance for an account of `data_len` bytes to be
    /// rent exempt.
    async fn minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, ProviderError>;

    /// The latest blockhash, used as the transaction freshness token.
    async fn latest_blockhash(&self) -> Result<[u8; 32], ProviderError>;
}

/// Broadcasts a signed wire-format transaction.
#[async_trait]
pub trait SubmissionAdapter: Send + Sync {
    /// Submit the transaction and return its signature string, or a
    /// network-level rejection.
    async fn submit_transaction(&self, wire: &[u8]) -> Result<String, ProviderError>;
}
