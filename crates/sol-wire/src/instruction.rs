//! Instruction types and builders for well-known programs.

use crate::pubkey::Pubkey;

/// The Solana System Program public key: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: Pubkey = Pubkey::new([0u8; 32]);

/// Rent sysvar account: `SysvarRent111111111111111111111111111111111`
pub const RENT_SYSVAR_ID: Pubkey = Pubkey::new([
    0x06, 0xa7, 0xd5, 0x17, 0x19, 0x2c, 0x5c, 0x51, 0x21, 0x8c, 0xc9, 0x4c, 0x3d, 0x4a, 0xf1,
    0x7f, 0x58, 0xda, 0xee, 0x08, 0x9b, 0xa1, 0xfd, 0x44, 0xe3, 0xdb, 0xd9, 0x8a, 0x00, 0x00,
    0x00, 0x00,
]);

/// Byte size of an SPL mint account.
pub const MINT_ACCOUNT_LEN: usize = 82;

/// A single account reference in an instruction.
///
/// The position of each meta in an instruction's account list is part of
/// the receiving program's wire contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    pub fn writable(pubkey: Pubkey, is_signer: bool) -> Self {
        AccountMeta {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    pub fn readonly(pubkey: Pubkey, is_signer: bool) -> Self {
        AccountMeta {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// An instruction before it is compiled into a transaction.
#[derive(Debug, Clone)]
pub struct Instruction {
    pub program_id: Pubkey,
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// System Program instruction builders.
pub mod system {
    use super::*;

    /// System Program `CreateAccount` instruction index (little-endian u32).
    const CREATE_ACCOUNT_IX_INDEX: u32 = 0;

    /// Build a System Program `CreateAccount` instruction.
    ///
    /// Funds `new_account` with `lamports`, allocates `space` bytes and
    /// assigns ownership to `owner`. Both the funding account and the new
    /// account must sign.
    ///
    /// Data layout: u32 LE index (0) : u64 LE lamports : u64 LE space :
    /// 32-byte owner. Total 52 bytes.
    pub fn create_account(
        from: &Pubkey,
        new_account: &Pubkey,
        lamports: u64,
        space: u64,
        owner: &Pubkey,
    ) -> Instruction {
        let mut data = Vec::with_capacity(52);
        data.extend_from_slice(&CREATE_ACCOUNT_IX_INDEX.to_le_bytes());
        data.extend_from_slice(&lamports.to_le_bytes());
        data.extend_from_slice(&space.to_le_bytes());
        data.extend_from_slice(owner.as_bytes());

        Instruction {
            program_id: SYSTEM_PROGRAM_ID,
            accounts: vec![
                AccountMeta::writable(*from, true),
                AccountMeta::writable(*new_account, true),
            ],
            data,
        }
    }
}

/// SPL Token instruction builders (shared by the legacy and 2022 programs).
pub mod token {
    use super::*;

    /// SPL Token `InitializeMint2` instruction tag.
    const INITIALIZE_MINT2_IX_TAG: u8 = 20;

    /// Build an SPL Token `InitializeMint2` instruction.
    ///
    /// Unlike the original `InitializeMint` this variant does not reference
    /// the rent sysvar, so the only account is the mint itself.
    ///
    /// Data layout: u8 tag (20) : u8 decimals : 32-byte mint authority :
    /// COption freeze authority (1 byte discriminant, 32 bytes if present).
    pub fn initialize_mint2(
        token_program: &Pubkey,
        mint: &Pubkey,
        decimals: u8,
        mint_authority: &Pubkey,
        freeze_authority: Option<&Pubkey>,
    ) -> Instruction {
        let mut data = Vec::with_capacity(67);
        data.push(INITIALIZE_MINT2_IX_TAG);
        data.push(decimals);
        data.extend_from_slice(mint_authority.as_bytes());
        match freeze_authority {
            Some(authority) => {
                data.push(1);
                data.extend_from_slice(authority.as_bytes());
            }
            None => data.push(0),
        }

        Instruction {
            program_id: *token_program,
            accounts: vec![AccountMeta::writable(*mint, false)],
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_program_id_roundtrip() {
        assert_eq!(
            SYSTEM_PROGRAM_ID.to_base58(),
            "11111111111111111111111111111111"
        );
    }

    #[test]
    fn rent_sysvar_id_roundtrip() {
        assert_eq!(
            RENT_SYSVAR_ID.to_base58(),
            "SysvarRent111111111111111111111111111111111"
        );
    }

    // -- CreateAccount -------------------------------------------------------

    #[test]
    fn create_account_data_is_52_bytes() {
        let from = Pubkey::new([1u8; 32]);
        let new = Pubkey::new([2u8; 32]);
        let owner = Pubkey::new([3u8; 32]);

        let ix = system::create_account(&from, &new, 1_461_600, 82, &owner);
        assert_eq!(ix.data.len(), 52);
        // u32 LE index = 0 (CreateAccount).
        assert_eq!(&ix.data[..4], &[0, 0, 0, 0]);
        // Lamports and space as u64 LE.
        assert_eq!(&ix.data[4..12], &1_461_600u64.to_le_bytes());
        assert_eq!(&ix.data[12..20], &82u64.to_le_bytes());
        // Owner program bytes.
        assert_eq!(&ix.data[20..52], owner.as_bytes());
    }

    #[test]
    fn create_account_both_accounts_sign() {
        let from = Pubkey::new([1u8; 32]);
        let new = Pubkey::new([2u8; 32]);
        let owner = Pubkey::new([3u8; 32]);

        let ix = system::create_account(&from, &new, 100, 82, &owner);
        assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 2);
        assert_eq!(ix.accounts[0], AccountMeta::writable(from, true));
        assert_eq!(ix.accounts[1], AccountMeta::writable(new, true));
    }

    // -- InitializeMint2 -----------------------------------------------------

    #[test]
    fn initialize_mint2_without_freeze_authority() {
        let token_program = Pubkey::new([9u8; 32]);
        let mint = Pubkey::new([2u8; 32]);
        let authority = Pubkey::new([3u8; 32]);

        let ix = token::initialize_mint2(&token_program, &mint, 6, &authority, None);
        assert_eq!(ix.program_id, token_program);
        // tag + decimals + authority + COption::None = 35 bytes.
        assert_eq!(ix.data.len(), 35);
        assert_eq!(ix.data[0], 20);
        assert_eq!(ix.data[1], 6);
        assert_eq!(&ix.data[2..34], authority.as_bytes());
        assert_eq!(ix.data[34], 0);
    }

    #[test]
    fn initialize_mint2_with_freeze_authority() {
        let token_program = Pubkey::new([9u8; 32]);
        let mint = Pubkey::new([2u8; 32]);
        let authority = Pubkey::new([3u8; 32]);
        let freeze = Pubkey::new([4u8; 32]);

        let ix = token::initialize_mint2(&token_program, &mint, 9, &authority, Some(&freeze));
        // tag + decimals + authority + COption::Some = 67 bytes.
        assert_eq!(ix.data.len(), 67);
        assert_eq!(ix.data[34], 1);
        assert_eq!(&ix.data[35..67], freeze.as_bytes());
    }

    #[test]
    fn initialize_mint2_touches_only_the_mint() {
        let token_program = Pubkey::new([9u8; 32]);
        let mint = Pubkey::new([2u8; 32]);
        let authority = Pubkey::new([3u8; 32]);

        let ix = token::initialize_mint2(&token_program, &mint, 6, &authority, None);
        assert_eq!(ix.accounts.len(), 1);
        assert_eq!(ix.accounts[0], AccountMeta::writable(mint, false));
    }
}
