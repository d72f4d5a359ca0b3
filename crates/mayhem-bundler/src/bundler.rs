//! The instruction bundler.
//!
//! `MayhemBundler` turns validated coin parameters into one unsigned
//! transaction of exactly three instructions: create the mint account,
//! initialize it as a Token-2022 mint, and invoke the bonding curve
//! program's `create_v2` entry point. The bundler holds no mutable state;
//! independent calls may share one instance and one provider.

use sol_wire::{system, token, Instruction, Keypair, Pubkey, Transaction, MINT_ACCOUNT_LEN};

use crate::accounts::{create_v2_account_metas, derive_creation_accounts};
use crate::config::ProtocolConfig;
use crate::error::BundlerError;
use crate::payload::encode_create_v2;
use crate::provider::{NetworkStateProvider, SubmissionAdapter};

/// Coins launched through the bonding curve always use 6 decimals.
pub const TOKEN_DECIMALS: u8 = 6;

const MAX_NAME_LEN: usize = 32;
const MAX_SYMBOL_LEN: usize = 10;

/// Caller-supplied parameters for one coin creation.
#[derive(Debug, Clone)]
pub struct CoinParams {
    /// Display name, at most 32 UTF-8 bytes.
    pub name: String,
    /// Ticker symbol, at most 10 UTF-8 bytes.
    pub symbol: String,
    /// Off-chain metadata URI.
    pub uri: String,
    /// Whether to launch with the mayhem accounts attached.
    pub mayhem_mode: bool,
    /// The creator wallet; fee payer, mint authority and first signer.
    pub creator: Pubkey,
}

/// Everything the caller needs to inspect, sign and submit one creation.
#[derive(Debug)]
pub struct BundledCreation {
    pub mint: Pubkey,
    /// Generated fresh per call; the mint is a required co-signer and the
    /// bundler never keeps a copy.
    pub mint_keypair: Keypair,
    pub bonding_curve: Pubkey,
    pub metadata: Pubkey,
    pub user_token_account: Pubkey,
    /// Present only for mayhem-mode launches.
    pub mayhem_state: Option<Pubkey>,
    /// The unsigned envelope, exactly three instructions.
    pub transaction: Transaction,
}

/// Assembles and submits coin creation transactions.
pub struct MayhemBundler {
    config: ProtocolConfig,
}

impl MayhemBundler {
    pub fn new(config: ProtocolConfig) -> Self {
        MayhemBundler { config }
    }

    pub fn config(&self) -> &ProtocolConfig {
        &self.config
    }

    /// Assemble the creation transaction for `params`.
    ///
    /// Validation happens before any derivation or network call. The two
    /// network reads are issued concurrently; if either fails the whole
    /// call fails with a single network error and no partial envelope.
    pub async fn create_coin<P>(
        &self,
        params: &CoinParams,
        provider: &P,
    ) -> Result<BundledCreation, BundlerError>
    where
        P: NetworkStateProvider + ?Sized,
    {
        validate_params(params)?;

        let mint_keypair = Keypair::generate();
        let mint = mint_keypair.pubkey();

        let accounts =
            derive_creation_accounts(&self.config, &mint, &params.creator, params.mayhem_mode)?;

        let (mint_rent, recent_blockhash) = tokio::try_join!(
            provider.minimum_balance_for_rent_exemption(MINT_ACCOUNT_LEN),
            provider.latest_blockhash(),
        )
        .map_err(|source| BundlerError::Network {
            message: "failed to fetch rent minimum and latest blockhash".into(),
            source,
        })?;

        let mut tx = Transaction::new(params.creator, recent_blockhash);

        tx.add(system::create_account(
            &params.creator,
            &mint,
            mint_rent,
            MINT_ACCOUNT_LEN as u64,
            &self.config.token_2022_program,
        ));

        tx.add(token::initialize_mint2(
            &self.config.token_2022_program,
            &mint,
            TOKEN_DECIMALS,
            &params.creator,
            None,
        ));

        tx.add(Instruction {
            program_id: self.config.bonding_curve_program,
            accounts: create_v2_account_metas(&self.config, &accounts, &params.creator),
            data: encode_create_v2(
                params.mayhem_mode,
                &params.name,
                &params.symbol,
                &params.uri,
            )?,
        });

        Ok(BundledCreation {
            mint,
            mint_keypair,
            bonding_curve: accounts.bonding_curve,
            metadata: accounts.metadata,
            user_token_account: accounts.user_token_account,
            mayhem_state: accounts.mayhem.as_ref().map(|m| m.state),
            transaction: tx,
        })
    }

    /// Sign the bundled transaction and hand it to the submission adapter.
    ///
    /// The creator and the mint keypair must both be among `signers`. The
    /// adapter's failure is wrapped with its cause preserved; the bundler
    /// never rebroadcasts.
    pub async fn send<A>(
        &self,
        bundled: &BundledCreation,
        signers: &[&Keypair],
        adapter: &A,
    ) -> Result<String, BundlerError>
    where
        A: SubmissionAdapter + ?Sized,
    {
        if signers.is_empty() {
            return Err(BundlerError::Validation(
                "at least one signer is required".into(),
            ));
        }

        let wire = bundled.transaction.sign(signers)?;

        adapter
            .submit_transaction(&wire)
            .await
            .map_err(|source| BundlerError::Submission {
                message: "transaction rejected".into(),
                source,
            })
    }
}

fn validate_params(params: &CoinParams) -> Result<(), BundlerError> {
    if params.name.trim().is_empty() {
        return Err(BundlerError::Validation("coin name is required".into()));
    }
    if params.symbol.trim().is_empty() {
        return Err(BundlerError::Validation("coin symbol is required".into()));
    }
    if params.uri.trim().is_empty() {
        return Err(BundlerError::Validation("metadata uri is required".into()));
    }
    if params.name.len() > MAX_NAME_LEN {
        return Err(BundlerError::Validation(format!(
            "coin name must be {MAX_NAME_LEN} bytes or less"
        )));
    }
    if params.symbol.len() > MAX_SYMBOL_LEN {
        return Err(BundlerError::Validation(format!(
            "coin symbol must be {MAX_SYMBOL_LEN} bytes or less"
        )));
    }
    if params.uri.len() > u16::MAX as usize {
        return Err(BundlerError::Validation(
            "metadata uri exceeds the 16-bit length prefix".into(),
        ));
    }
    Ok(())
}
