//! Ed25519 keypairs.
//!
//! Wallet tooling passes Solana secret keys around as a 64-byte blob: the
//! 32-byte Ed25519 seed followed by the 32-byte public key. We accept that
//! blob either Base64-encoded or as a JSON byte array on disk (the two
//! formats the standard CLI tooling produces), and zeroize seed copies once
//! the signing key is built.

use std::fmt;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use ed25519_dalek::Signer;
use rand_core::OsRng;
use zeroize::Zeroize;

use crate::error::WireError;
use crate::pubkey::Pubkey;

/// An Ed25519 keypair usable as a transaction signer.
#[derive(Clone)]
pub struct Keypair {
    signing: ed25519_dalek::SigningKey,
}

impl Keypair {
    /// Generate a fresh random keypair.
    pub fn generate() -> Self {
        Keypair {
            signing: ed25519_dalek::SigningKey::generate(&mut OsRng),
        }
    }

    /// Build a keypair from a 32-byte Ed25519 seed.
    pub fn from_seed(seed: &[u8; 32]) -> Self {
        Keypair {
            signing: ed25519_dalek::SigningKey::from_bytes(seed),
        }
    }

    /// Build a keypair from a 64-byte secret key (seed followed by public
    /// key). The embedded public half must match the one derived from the
    /// seed.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WireError> {
        if bytes.len() != 64 {
            return Err(WireError::InvalidKey(format!(
                "expected 64-byte secret key, got {}",
                bytes.len()
            )));
        }

        let mut seed = [0u8; 32];
        seed.copy_from_slice(&bytes[..32]);
        let signing = ed25519_dalek::SigningKey::from_bytes(&seed);
        seed.zeroize();

        if signing.verifying_key().to_bytes() != bytes[32..64] {
            return Err(WireError::InvalidKey(
                "public key half does not match the seed".into(),
            ));
        }

        Ok(Keypair { signing })
    }

    /// Build a keypair from a Base64-encoded 64-byte secret key.
    pub fn from_base64(encoded: &str) -> Result<Self, WireError> {
        let mut bytes = BASE64
            .decode(encoded.trim())
            .map_err(|e| WireError::InvalidKey(format!("base64 decode failed: {e}")))?;
        let result = Keypair::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// Load a keypair from a JSON byte-array file (the format written by
    /// `solana-keygen`).
    pub fn from_json_file(path: &Path) -> Result<Self, WireError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| WireError::InvalidKey(format!("failed to read keypair file: {e}")))?;
        let mut bytes: Vec<u8> = serde_json::from_str(&contents)
            .map_err(|e| WireError::InvalidKey(format!("invalid keypair JSON: {e}")))?;
        let result = Keypair::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    pub fn pubkey(&self) -> Pubkey {
        Pubkey::new(self.signing.verifying_key().to_bytes())
    }

    /// Sign an arbitrary message, returning the 64-byte Ed25519 signature.
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing.sign(message).to_bytes()
    }

    /// Export the 64-byte secret key (seed followed by public key).
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&self.signing.to_bytes());
        out[32..].copy_from_slice(&self.signing.verifying_key().to_bytes());
        out
    }
}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print the secret half.
        write!(f, "Keypair({})", self.pubkey())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_distinct_keys() {
        let a = Keypair::generate();
        let b = Keypair::generate();
        assert_ne!(a.pubkey(), b.pubkey());
    }

    #[test]
    fn from_seed_is_deterministic() {
        let a = Keypair::from_seed(&[0x42u8; 32]);
        let b = Keypair::from_seed(&[0x42u8; 32]);
        assert_eq!(a.pubkey(), b.pubkey());
    }

    #[test]
    fn from_bytes_roundtrip() {
        let original = Keypair::from_seed(&[0x07u8; 32]);
        let restored = Keypair::from_bytes(&original.to_bytes()).unwrap();
        assert_eq!(original.pubkey(), restored.pubkey());
    }

    #[test]
    fn from_bytes_wrong_length_fails() {
        assert!(Keypair::from_bytes(&[0u8; 32]).is_err());
        assert!(Keypair::from_bytes(&[0u8; 63]).is_err());
        assert!(Keypair::from_bytes(&[]).is_err());
    }

    #[test]
    fn from_bytes_mismatched_public_half_fails() {
        let mut bytes = Keypair::from_seed(&[0x07u8; 32]).to_bytes();
        bytes[40] ^= 0xff;
        assert!(Keypair::from_bytes(&bytes).is_err());
    }

    #[test]
    fn from_base64_roundtrip() {
        let original = Keypair::from_seed(&[0x11u8; 32]);
        let encoded = BASE64.encode(original.to_bytes());
        let restored = Keypair::from_base64(&encoded).unwrap();
        assert_eq!(original.pubkey(), restored.pubkey());
    }

    #[test]
    fn from_base64_tolerates_surrounding_whitespace() {
        let original = Keypair::from_seed(&[0x11u8; 32]);
        let encoded = format!("  {}\n", BASE64.encode(original.to_bytes()));
        assert!(Keypair::from_base64(&encoded).is_ok());
    }

    #[test]
    fn from_base64_garbage_fails() {
        assert!(Keypair::from_base64("###not-base64###").is_err());
    }

    #[test]
    fn from_json_file_roundtrip() {
        let original = Keypair::from_seed(&[0x23u8; 32]);
        let json = serde_json::to_string(&original.to_bytes().to_vec()).unwrap();

        let path = std::env::temp_dir().join("sol-wire-keypair-test.json");
        std::fs::write(&path, json).unwrap();
        let restored = Keypair::from_json_file(&path);
        std::fs::remove_file(&path).ok();

        assert_eq!(original.pubkey(), restored.unwrap().pubkey());
    }

    #[test]
    fn from_json_file_missing_fails() {
        let path = std::env::temp_dir().join("sol-wire-keypair-does-not-exist.json");
        assert!(Keypair::from_json_file(&path).is_err());
    }

    #[test]
    fn sign_verifies() {
        use ed25519_dalek::{Signature, VerifyingKey};

        let keypair = Keypair::from_seed(&[0x55u8; 32]);
        let message = b"verify me";
        let sig_bytes = keypair.sign(message);

        let sig = Signature::from_bytes(&sig_bytes);
        let vk = VerifyingKey::from_bytes(keypair.pubkey().as_bytes()).unwrap();
        assert!(vk.verify_strict(message, &sig).is_ok());
    }

    #[test]
    fn sign_is_deterministic() {
        let keypair = Keypair::from_seed(&[0x55u8; 32]);
        assert_eq!(keypair.sign(b"message"), keypair.sign(b"message"));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let keypair = Keypair::from_seed(&[0x09u8; 32]);
        let debug = format!("{keypair:?}");
        assert!(debug.contains(&keypair.pubkey().to_base58()));
        // The seed is 32 identical bytes; its hex must not show up.
        assert!(!debug.contains("090909"));
    }
}
