//! Solana public keys.
//!
//! A Solana address is the Base58 encoding of a raw 32-byte value. There is
//! no hashing step (unlike Bitcoin or Ethereum): for wallet accounts the
//! bytes ARE an Ed25519 public key, for program-derived addresses they are
//! a SHA-256 output that is deliberately off the curve.

use std::fmt;
use std::str::FromStr;

use crate::error::WireError;

/// A 32-byte Solana account address.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pubkey([u8; 32]);

impl Pubkey {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }

    /// Decode a Base58 address string.
    ///
    /// Fails if the string is not valid Base58 or does not decode to
    /// exactly 32 bytes.
    pub fn from_base58(address: &str) -> Result<Self, WireError> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| WireError::InvalidAddress(format!("base58 decode failed: {e}")))?;

        let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
            WireError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
        })?;

        Ok(Pubkey(arr))
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(self.0).into_string()
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub const fn to_bytes(self) -> [u8; 32] {
        self.0
    }
}

impl AsRef<[u8]> for Pubkey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 32]> for Pubkey {
    fn from(bytes: [u8; 32]) -> Self {
        Pubkey(bytes)
    }
}

impl FromStr for Pubkey {
    type Err = WireError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pubkey::from_base58(s)
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58())
    }
}

impl fmt::Debug for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pubkey({})", self.to_base58())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program address is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in Base58.
    #[test]
    fn system_program_address() {
        let zeros = Pubkey::new([0u8; 32]);
        assert_eq!(zeros.to_base58(), "11111111111111111111111111111111");
    }

    #[test]
    fn roundtrip_encode_decode() {
        // Known Solana address (the Token Program)
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let key = Pubkey::from_base58(address).unwrap();
        assert_eq!(key.to_base58(), address);
    }

    #[test]
    fn from_str_matches_from_base58() {
        let address = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";
        let a: Pubkey = address.parse().unwrap();
        let b = Pubkey::from_base58(address).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn garbage_returns_error() {
        assert!(Pubkey::from_base58("not-a-valid-address!!!").is_err());
    }

    #[test]
    fn too_short_returns_error() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        assert!(Pubkey::from_base58("1").is_err());
    }

    #[test]
    fn display_is_base58() {
        let key = Pubkey::new([0xffu8; 32]);
        assert_eq!(format!("{key}"), key.to_base58());
    }

    #[test]
    fn bytes_accessors_agree() {
        let bytes = [0x42u8; 32];
        let key = Pubkey::new(bytes);
        assert_eq!(key.as_bytes(), &bytes);
        assert_eq!(key.to_bytes(), bytes);
    }
}
