//! Protocol deployment constants.
//!
//! Program identifiers, the fee recipient and the PDA seed tags form one
//! injected configuration value rather than scattered globals, so a test
//! deployment can substitute a different constant set without code changes.

use sol_wire::Pubkey;

/// Bonding curve program: `6EF8rrecthR5Dkzon8Nwu78hRvfCKubJ14M5uBEwF6P`
const BONDING_CURVE_PROGRAM_ID: Pubkey = Pubkey::new([
    0x01, 0x56, 0xe0, 0xf6, 0x93, 0x66, 0x5a, 0xcf, 0x44, 0xdb, 0x15, 0x68, 0xbf, 0x17, 0x5b,
    0xaa, 0x51, 0x89, 0xcb, 0x97, 0xf5, 0xd2, 0xff, 0x3b, 0x65, 0x5d, 0x2b, 0xb6, 0xfd, 0x6d,
    0x18, 0xb0,
]);

/// Mayhem program: `MAyhSmzXzV1pTf7LsNkrNwkWKTo4ougAJ1PPg47MD4e`
const MAYHEM_PROGRAM_ID: Pubkey = Pubkey::new([
    0x05, 0x2a, 0xe5, 0xd7, 0xa7, 0xda, 0xa7, 0x24, 0xa6, 0xea, 0xb0, 0xa7, 0x29, 0x54, 0x91,
    0x85, 0x5a, 0xd4, 0xa0, 0x67, 0x16, 0x60, 0x67, 0x4c, 0x4e, 0x03, 0x45, 0x59, 0x80, 0x3d,
    0x65, 0xa3,
]);

/// Mayhem fee recipient: `GesfTA3X2arioaHp8bbKdjG9vJtskViWACZoYvxp4twS`
const MAYHEM_FEE_RECIPIENT: Pubkey = Pubkey::new([
    0xe8, 0x93, 0x14, 0x1f, 0xb1, 0x8e, 0x9f, 0x15, 0x74, 0xd8, 0x10, 0xe1, 0x78, 0xe1, 0x9e,
    0x30, 0x60, 0x4e, 0x31, 0x75, 0xaa, 0x2e, 0x4a, 0x32, 0xdf, 0xc8, 0x60, 0x07, 0x27, 0xd1,
    0x07, 0x09,
]);

/// Legacy SPL Token program: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
const TOKEN_PROGRAM_ID: Pubkey = Pubkey::new([
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
]);

/// Token-2022 program: `TokenzQdBNbLqP5VEhdkAS6EPFLC1PHnBqCXEpPxuEb`
const TOKEN_2022_PROGRAM_ID: Pubkey = Pubkey::new([
    0x06, 0xdd, 0xf6, 0xe1, 0xee, 0x75, 0x8f, 0xde, 0x18, 0x42, 0x5d, 0xbc, 0xe4, 0x6c, 0xcd,
    0xda, 0xb6, 0x1a, 0xfc, 0x4d, 0x83, 0xb9, 0x0d, 0x27, 0xfe, 0xbd, 0xf9, 0x28, 0xd8, 0xa1,
    0x8b, 0xfc,
]);

/// Wrapped SOL mint: `So11111111111111111111111111111111111111112`
const WSOL_MINT: Pubkey = Pubkey::new([
    0x06, 0x9b, 0x88, 0x57, 0xfe, 0xab, 0x81, 0x84, 0xfb, 0x68, 0x7f, 0x63, 0x46, 0x18, 0xc0,
    0x35, 0xda, 0xc4, 0x39, 0xdc, 0x1a, 0xeb, 0x3b, 0x55, 0x98, 0xa0, 0xf0, 0x00, 0x00, 0x00,
    0x00, 0x01,
]);

/// Token metadata program: `metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s`
const METADATA_PROGRAM_ID: Pubkey = Pubkey::new([
    0x0b, 0x70, 0x65, 0xb1, 0xe3, 0xd1, 0x7c, 0x45, 0x38, 0x9d, 0x52, 0x7f, 0x6b, 0x04, 0xc3,
    0xcd, 0x58, 0xb8, 0x6c, 0x73, 0x1a, 0xa0, 0xfd, 0xb5, 0x49, 0xb6, 0xd1, 0xbc, 0x03, 0xf8,
    0x29, 0x46,
]);

/// The constant set of one protocol deployment.
#[derive(Debug, Clone)]
pub struct ProtocolConfig {
    pub bonding_curve_program: Pubkey,
    pub mayhem_program: Pubkey,
    pub mayhem_fee_recipient: Pubkey,
    pub token_program: Pubkey,
    pub token_2022_program: Pubkey,
    pub wsol_mint: Pubkey,
    pub metadata_program: Pubkey,

    pub bonding_curve_seed: &'static [u8],
    pub metadata_seed: &'static [u8],
    pub mayhem_state_seed: &'static [u8],
    pub sol_vault_seed: &'static [u8],
}

impl ProtocolConfig {
    /// The mainnet deployment.
    pub fn mainnet() -> Self {
        ProtocolConfig {
            bonding_curve_program: BONDING_CURVE_PROGRAM_ID,
            mayhem_program: MAYHEM_PROGRAM_ID,
            mayhem_fee_recipient: MAYHEM_FEE_RECIPIENT,
            token_program: TOKEN_PROGRAM_ID,
            token_2022_program: TOKEN_2022_PROGRAM_ID,
            wsol_mint: WSOL_MINT,
            metadata_program: METADATA_PROGRAM_ID,
            bonding_curve_seed: b"bonding-curve",
            metadata_seed: b"metadata",
            mayhem_state_seed: b"mayhem-state",
            sol_vault_seed: b"sol-vault",
        }
    }
}
