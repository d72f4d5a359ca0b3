//! Deterministic transaction bundler for bonding-curve coin launches.
//!
//! Given coin parameters, the bundler derives every account the bonding
//! curve program expects, encodes its `create_v2` payload and assembles an
//! atomic three-instruction transaction. Network access goes through the
//! injected [`provider::NetworkStateProvider`] and
//! [`provider::SubmissionAdapter`] traits; everything else is pure and
//! deterministic.
//!
//! ```no_run
//! use mayhem_bundler::{CoinParams, MayhemBundler, ProtocolConfig};
//! # use mayhem_bundler::provider::NetworkStateProvider;
//! # async fn demo(provider: &dyn NetworkStateProvider, creator: sol_wire::Pubkey) {
//! let bundler = MayhemBundler::new(ProtocolConfig::mainnet());
//! let bundled = bundler
//!     .create_coin(
//!         &CoinParams {
//!             name: "My Mayhem Coin".into(),
//!             symbol: "MAYHEM".into(),
//!             uri: "https://example.com/metadata.json".into(),
//!             mayhem_mode: true,
//!             creator,
//!         },
//!         provider,
//!     )
//!     .await
//!     .unwrap();
//! println!("mint: {}", bundled.mint);
//! # }
//! ```

pub mod accounts;
pub mod bundler;
pub mod config;
pub mod error;
pub mod payload;
pub mod provider;

// Re-export key public types for ergonomic imports.
pub use accounts::{create_v2_account_metas, derive_creation_accounts, DerivedAccounts, MayhemAccounts};
pub use bundler::{BundledCreation, CoinParams, MayhemBundler, TOKEN_DECIMALS};
pub use config::ProtocolConfig;
pub use error::BundlerError;
pub use payload::{encode_create_v2, CREATE_V2_DISCRIMINATOR};
pub use provider::{NetworkStateProvider, ProviderError, SubmissionAdapter};
