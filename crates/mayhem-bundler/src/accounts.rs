//! Per-launch account derivations and the `create_v2` account list.
//!
//! Every address here is either a PDA computed from protocol seed tags or
//! an associated token account. Seed ordering and the owning program of
//! each derivation are contracts of the receiving programs: the metadata
//! and mayhem PDAs live under their own governing programs, not under the
//! bonding curve program.

use sol_wire::{derive_associated_token_address, find_program_address, AccountMeta, Pubkey};
use sol_wire::{RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID};

use crate::config::ProtocolConfig;
use crate::error::BundlerError;

/// The extra accounts present only when mayhem mode is active.
#[derive(Debug, Clone)]
pub struct MayhemAccounts {
    pub state: Pubkey,
    pub sol_vault: Pubkey,
    pub fee_recipient_wsol: Pubkey,
}

/// Every address derived for one creation request.
#[derive(Debug, Clone)]
pub struct DerivedAccounts {
    pub mint: Pubkey,
    pub bonding_curve: Pubkey,
    pub metadata: Pubkey,
    pub user_token_account: Pubkey,
    /// Present exactly when the request has mayhem mode enabled.
    pub mayhem: Option<MayhemAccounts>,
}

/// Derive the bonding curve state PDA for a mint.
///
/// Seeds: `[bonding-curve tag, mint, token-2022 program]`, owned by the
/// bonding curve program.
pub fn derive_bonding_curve(
    config: &ProtocolConfig,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), BundlerError> {
    Ok(find_program_address(
        &[
            config.bonding_curve_seed,
            mint.as_ref(),
            config.token_2022_program.as_ref(),
        ],
        &config.bonding_curve_program,
    )?)
}

/// Derive the metadata PDA for a mint.
///
/// Seeds: `[metadata tag, metadata program, mint]`, owned by the metadata
/// program itself.
pub fn derive_metadata(
    config: &ProtocolConfig,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), BundlerError> {
    Ok(find_program_address(
        &[
            config.metadata_seed,
            config.metadata_program.as_ref(),
            mint.as_ref(),
        ],
        &config.metadata_program,
    )?)
}

/// Derive the per-mint mayhem state PDA.
///
/// Seeds: `[mayhem-state tag, mint, mayhem program]`, owned by the mayhem
/// program itself.
pub fn derive_mayhem_state(
    config: &ProtocolConfig,
    mint: &Pubkey,
) -> Result<(Pubkey, u8), BundlerError> {
    Ok(find_program_address(
        &[
            config.mayhem_state_seed,
            mint.as_ref(),
            config.mayhem_program.as_ref(),
        ],
        &config.mayhem_program,
    )?)
}

/// Derive the mayhem SOL vault PDA (one per deployment, not per mint).
pub fn derive_sol_vault(config: &ProtocolConfig) -> Result<(Pubkey, u8), BundlerError> {
    Ok(find_program_address(
        &[config.sol_vault_seed, config.mayhem_program.as_ref()],
        &config.mayhem_program,
    )?)
}

/// The creator's associated token account for the new mint, under
/// Token-2022 in both modes.
pub fn derive_user_token_account(
    config: &ProtocolConfig,
    creator: &Pubkey,
    mint: &Pubkey,
) -> Result<Pubkey, BundlerError> {
    Ok(derive_associated_token_address(
        creator,
        mint,
        &config.token_2022_program,
    )?)
}

/// The fee recipient's wrapped-SOL account, under the legacy token program.
pub fn derive_fee_recipient_wsol(config: &ProtocolConfig) -> Result<Pubkey, BundlerError> {
    Ok(derive_associated_token_address(
        &config.mayhem_fee_recipient,
        &config.wsol_mint,
        &config.token_program,
    )?)
}

/// Derive the full account set for one creation request. The mayhem subset
/// is derived only when the mode is enabled.
pub fn derive_creation_accounts(
    config: &ProtocolConfig,
    mint: &Pubkey,
    creator: &Pubkey,
    mayhem_mode: bool,
) -> Result<DerivedAccounts, BundlerError> {
    let (bonding_curve, _) = derive_bonding_curve(config, mint)?;
    let (metadata, _) = derive_metadata(config, mint)?;
    let user_token_account = derive_user_token_account(config, creator, mint)?;

    let mayhem = if mayhem_mode {
        let (state, _) = derive_mayhem_state(config, mint)?;
        let (sol_vault, _) = derive_sol_vault(config)?;
        Some(MayhemAccounts {
            state,
            sol_vault,
            fee_recipient_wsol: derive_fee_recipient_wsol(config)?,
        })
    } else {
        None
    };

    Ok(DerivedAccounts {
        mint: *mint,
        bonding_curve,
        metadata,
        user_token_account,
        mayhem,
    })
}

/// Compose the ordered account list of the `create_v2` instruction.
///
/// Exactly 9 entries without mayhem mode, 14 with it; the mayhem accounts
/// are appended strictly after the baseline nine, never interleaved. The
/// positions are the bonding curve program's wire contract.
pub fn create_v2_account_metas(
    config: &ProtocolConfig,
    accounts: &DerivedAccounts,
    creator: &Pubkey,
) -> Vec<AccountMeta> {
    let mut metas = vec![
        AccountMeta::writable(*creator, true),
        AccountMeta::writable(accounts.mint, true),
        AccountMeta::writable(accounts.bonding_curve, false),
        AccountMeta::writable(accounts.metadata, false),
        AccountMeta::writable(accounts.user_token_account, false),
        AccountMeta::readonly(SYSTEM_PROGRAM_ID, false),
        AccountMeta::readonly(config.token_2022_program, false),
        AccountMeta::readonly(RENT_SYSVAR_ID, false),
        AccountMeta::readonly(config.metadata_program, false),
    ];

    if let Some(mayhem) = &accounts.mayhem {
        metas.push(AccountMeta::readonly(config.mayhem_program, false));
        metas.push(AccountMeta::writable(mayhem.state, false));
        metas.push(AccountMeta::writable(mayhem.sol_vault, false));
        metas.push(AccountMeta::writable(config.mayhem_fee_recipient, false));
        metas.push(AccountMeta::writable(mayhem.fee_recipient_wsol, false));
    }

    metas
}
