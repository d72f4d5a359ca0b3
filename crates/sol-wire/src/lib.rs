//! Solana wire-format plumbing for the mayhem bundler.
//!
//! This crate implements the chain-level pieces the bundler needs — Base58
//! addresses, Ed25519 keypairs, program-derived-address (PDA) search,
//! instruction encoding, and the legacy transaction wire format — all
//! without pulling in `solana-sdk` (which drags in tokio and 200+
//! transitive dependencies).
//!
//! Instead we implement Solana's compact binary layout by hand, using
//! `ed25519-dalek` for signing, `curve25519-dalek` for the off-curve check
//! in PDA derivation, and `bs58` for Base58 encoding.

pub mod error;
pub mod instruction;
pub mod keypair;
pub mod pda;
pub mod pubkey;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use error::WireError;
pub use instruction::{
    system, token, AccountMeta, Instruction, MINT_ACCOUNT_LEN, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID,
};
pub use keypair::Keypair;
pub use pda::{
    derive_associated_token_address, find_program_address, ASSOCIATED_TOKEN_PROGRAM_ID,
};
pub use pubkey::Pubkey;
pub use transaction::{
    decode_compact_u16, encode_compact_u16, CompiledInstruction, Message, Transaction,
};
