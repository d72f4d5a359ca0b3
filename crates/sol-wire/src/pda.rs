//! Program-derived address (PDA) search.
//!
//! A PDA is `SHA-256(seed_0 || .. || seed_n || bump || owner || "ProgramDerivedAddress")`
//! for the first bump in 255..=0 whose digest is NOT a valid Ed25519 curve
//! point. An off-curve address has no private key, so only the owning
//! program can sign for it.

use sha2::{Digest, Sha256};

use crate::error::WireError;
use crate::pubkey::Pubkey;

/// Associated Token Account Program ID: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = Pubkey::new([
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
]);

/// The string appended to PDA derivation: "ProgramDerivedAddress".
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find a valid program-derived address for the given seeds and owner.
///
/// Iterates bump seeds from 255 down to 0 and returns the first off-curve
/// result together with the bump that produced it. Deterministic: the same
/// seeds and owner always map to the same `(address, bump)`.
///
/// The seed ordering is part of the owning program's contract — callers
/// must pass seeds exactly as that program derives them.
pub fn find_program_address(
    seeds: &[&[u8]],
    owner: &Pubkey,
) -> Result<(Pubkey, u8), WireError> {
    for bump in (0u8..=255).rev() {
        if let Some(address) = try_create_program_address(seeds, bump, owner) {
            return Ok((address, bump));
        }
    }

    // Statistically unreachable: each bump fails with probability ~1/2.
    Err(WireError::PdaNotFound)
}

/// Attempt to create a PDA from seeds + bump + owner.
///
/// Returns `Some(address)` if the derived point is OFF the Ed25519 curve,
/// `None` if it falls on the curve (invalid PDA, try the next bump).
fn try_create_program_address(seeds: &[&[u8]], bump: u8, owner: &Pubkey) -> Option<Pubkey> {
    let mut hasher = Sha256::new();

    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(owner.as_bytes());
    hasher.update(PDA_MARKER);

    let hash: [u8; 32] = hasher.finalize().into();

    if is_on_curve(&hash) {
        return None;
    }

    Some(Pubkey::new(hash))
}

/// Check if 32 bytes represent a valid Ed25519 curve point.
///
/// Uses `curve25519-dalek` to attempt decompression. If it succeeds, the
/// point is on the curve.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

/// Derive the associated token account address for an owner + mint pair
/// under the given token program.
///
/// Seeds are `[owner, token_program, mint]`, derived from the Associated
/// Token Account program.
pub fn derive_associated_token_address(
    owner: &Pubkey,
    mint: &Pubkey,
    token_program: &Pubkey,
) -> Result<Pubkey, WireError> {
    find_program_address(
        &[owner.as_ref(), token_program.as_ref(), mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOKEN_PROGRAM: Pubkey = Pubkey::new([
        0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb,
        0x79, 0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85,
        0x7e, 0xff, 0x00, 0xa9,
    ]);

    #[test]
    fn associated_token_program_id_roundtrip() {
        assert_eq!(
            ASSOCIATED_TOKEN_PROGRAM_ID.to_base58(),
            "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL"
        );
    }

    #[test]
    fn pda_is_not_on_curve() {
        let owner = Pubkey::new([0xAAu8; 32]);
        let (pda, _bump) = find_program_address(&[b"seed"], &owner).unwrap();
        assert!(!is_on_curve(pda.as_bytes()), "PDA must NOT be on the curve");
    }

    #[test]
    fn derivation_is_deterministic() {
        let owner = Pubkey::new([0x11u8; 32]);
        let a = find_program_address(&[b"state", &[0x22u8; 32]], &owner).unwrap();
        let b = find_program_address(&[b"state", &[0x22u8; 32]], &owner).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_give_different_addresses() {
        let owner = Pubkey::new([0x11u8; 32]);
        let (a, _) = find_program_address(&[b"alpha"], &owner).unwrap();
        let (b, _) = find_program_address(&[b"beta"], &owner).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn seed_order_matters() {
        let owner = Pubkey::new([0x11u8; 32]);
        let (a, _) = find_program_address(&[b"one", b"two"], &owner).unwrap();
        let (b, _) = find_program_address(&[b"two", b"one"], &owner).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn owner_program_matters() {
        // The same seeds under two different owning programs must derive
        // different addresses — the classic wrong-owner derivation bug.
        let seeds: &[&[u8]] = &[b"metadata", &[0x33u8; 32]];
        let (a, _) = find_program_address(seeds, &Pubkey::new([0x01u8; 32])).unwrap();
        let (b, _) = find_program_address(seeds, &Pubkey::new([0x02u8; 32])).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ata_derivation_is_deterministic() {
        let wallet = Pubkey::new([0x11u8; 32]);
        let mint = Pubkey::new([0x22u8; 32]);

        let a = derive_associated_token_address(&wallet, &mint, &TOKEN_PROGRAM).unwrap();
        let b = derive_associated_token_address(&wallet, &mint, &TOKEN_PROGRAM).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ata_differs_per_wallet_and_mint() {
        let wallet_a = Pubkey::new([0x01u8; 32]);
        let wallet_b = Pubkey::new([0x02u8; 32]);
        let mint_a = Pubkey::new([0xEEu8; 32]);
        let mint_b = Pubkey::new([0xFFu8; 32]);

        let aa = derive_associated_token_address(&wallet_a, &mint_a, &TOKEN_PROGRAM).unwrap();
        let ba = derive_associated_token_address(&wallet_b, &mint_a, &TOKEN_PROGRAM).unwrap();
        let ab = derive_associated_token_address(&wallet_a, &mint_b, &TOKEN_PROGRAM).unwrap();
        assert_ne!(aa, ba);
        assert_ne!(aa, ab);
    }

    #[test]
    fn ata_differs_per_token_program() {
        let wallet = Pubkey::new([0xAAu8; 32]);
        let mint = Pubkey::new([0xBBu8; 32]);
        let other_program = Pubkey::new([0xCCu8; 32]);

        let a = derive_associated_token_address(&wallet, &mint, &TOKEN_PROGRAM).unwrap();
        let b = derive_associated_token_address(&wallet, &mint, &other_program).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn is_on_curve_accepts_basepoint() {
        // The Ed25519 basepoint (compressed form).
        let basepoint: [u8; 32] = [
            0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66,
        ];
        assert!(is_on_curve(&basepoint));
    }

    #[test]
    fn is_on_curve_rejects_non_point() {
        // y = 0x0202..02 does not correspond to a valid curve point.
        assert!(!is_on_curve(&[0x02u8; 32]));
    }
}
