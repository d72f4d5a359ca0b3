//! Legacy Solana transaction wire format.
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```

use crate::error::WireError;
use crate::instruction::Instruction;
use crate::keypair::Keypair;
use crate::pubkey::Pubkey;

// ---------------------------------------------------------------------------
// Compact-u16 encoding
// ---------------------------------------------------------------------------

/// Encode a `u16` value in Solana's compact-u16 format.
///
/// - Values 0..0x7f       -> 1 byte
/// - Values 0x80..0x3fff  -> 2 bytes
/// - Values 0x4000..      -> 3 bytes
pub fn encode_compact_u16(value: u16) -> Vec<u8> {
    let mut val = value as u32;
    let mut out = Vec::with_capacity(3);

    loop {
        let mut byte = (val & 0x7f) as u8;
        val >>= 7;
        if val > 0 {
            byte |= 0x80;
        }
        out.push(byte);
        if val == 0 {
            break;
        }
    }

    out
}

/// Decode a compact-u16 value from a byte slice.
///
/// Returns `(value, bytes_consumed)` or an error if the data is truncated.
pub fn decode_compact_u16(data: &[u8]) -> Result<(u16, usize), WireError> {
    let mut value: u32 = 0;
    let mut shift = 0u32;
    let mut consumed = 0usize;

    loop {
        if consumed >= data.len() {
            return Err(WireError::Serialization(
                "unexpected end of data while decoding compact-u16".into(),
            ));
        }
        let byte = data[consumed];
        consumed += 1;

        value |= ((byte & 0x7f) as u32) << shift;
        shift += 7;

        if byte & 0x80 == 0 {
            break;
        }
        // The encoding never needs more than three bytes for a u16, so a
        // continuation bit on the third byte is malformed input.
        if consumed >= 3 {
            return Err(WireError::Serialization(
                "compact-u16 continuation past the third byte".into(),
            ));
        }
    }

    if value > u16::MAX as u32 {
        return Err(WireError::Serialization("compact-u16 value overflow".into()));
    }

    Ok((value as u16, consumed))
}

// ---------------------------------------------------------------------------
// Transaction envelope
// ---------------------------------------------------------------------------

/// An unsigned transaction envelope: a fee payer, an ordered instruction
/// list, and a recent blockhash. Instruction order is preserved exactly as
/// appended.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub fee_payer: Pubkey,
    pub recent_blockhash: [u8; 32],
    pub instructions: Vec<Instruction>,
}

impl Transaction {
    /// Create an empty envelope for the given fee payer and blockhash.
    pub fn new(fee_payer: Pubkey, recent_blockhash: [u8; 32]) -> Self {
        Transaction {
            fee_payer,
            recent_blockhash,
            instructions: Vec::new(),
        }
    }

    /// Append an instruction. Order matters: instructions execute in the
    /// order they were added.
    pub fn add(&mut self, instruction: Instruction) {
        self.instructions.push(instruction);
    }

    /// Compile the envelope into a message: dedup accounts into the
    /// canonical section order and replace account references with indices.
    pub fn compile(&self) -> Result<Message, WireError> {
        struct AccountEntry {
            pubkey: Pubkey,
            is_signer: bool,
            is_writable: bool,
        }

        // Collect unique account keys with their permission bits. A Vec is
        // fine here: instruction account lists are tiny.
        let mut entries: Vec<AccountEntry> = Vec::new();

        let mut upsert = |pubkey: Pubkey, signer: bool, writable: bool| {
            if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == pubkey) {
                entry.is_signer |= signer;
                entry.is_writable |= writable;
            } else {
                entries.push(AccountEntry {
                    pubkey,
                    is_signer: signer,
                    is_writable: writable,
                });
            }
        };

        // Fee payer is always signer + writable and sorts to index 0.
        upsert(self.fee_payer, true, true);

        for ix in &self.instructions {
            for meta in &ix.accounts {
                upsert(meta.pubkey, meta.is_signer, meta.is_writable);
            }
            // Program IDs are non-signer, read-only accounts.
            upsert(ix.program_id, false, false);
        }

        if entries.len() > u8::MAX as usize + 1 {
            return Err(WireError::TransactionBuild(format!(
                "too many accounts: {}",
                entries.len()
            )));
        }

        // Canonical section order:
        //   1. writable signers  (fee payer first)
        //   2. read-only signers
        //   3. writable non-signers
        //   4. read-only non-signers
        // The sort is stable, so insertion order is kept within a section.
        fn rank(e: &AccountEntry) -> u8 {
            match (e.is_signer, e.is_writable) {
                (true, true) => 0,
                (true, false) => 1,
                (false, true) => 2,
                (false, false) => 3,
            }
        }
        entries.sort_by_key(rank);

        let num_required_signatures = entries.iter().filter(|e| e.is_signer).count() as u8;
        let num_readonly_signed = entries
            .iter()
            .filter(|e| e.is_signer && !e.is_writable)
            .count() as u8;
        let num_readonly_unsigned = entries
            .iter()
            .filter(|e| !e.is_signer && !e.is_writable)
            .count() as u8;

        let account_keys: Vec<Pubkey> = entries.iter().map(|e| e.pubkey).collect();

        let index_of = |pubkey: &Pubkey| -> Result<u8, WireError> {
            account_keys
                .iter()
                .position(|k| k == pubkey)
                .map(|i| i as u8)
                .ok_or_else(|| {
                    WireError::TransactionBuild(format!("account {pubkey} not in account keys"))
                })
        };

        // Compile instructions, keeping each instruction's own account
        // ordering — that ordering is the receiving program's contract.
        let mut instructions = Vec::with_capacity(self.instructions.len());
        for ix in &self.instructions {
            let program_id_index = index_of(&ix.program_id)?;
            let mut account_indices = Vec::with_capacity(ix.accounts.len());
            for meta in &ix.accounts {
                account_indices.push(index_of(&meta.pubkey)?);
            }
            instructions.push(CompiledInstruction {
                program_id_index,
                account_indices,
                data: ix.data.clone(),
            });
        }

        Ok(Message {
            account_keys,
            num_required_signatures,
            num_readonly_signed,
            num_readonly_unsigned,
            recent_blockhash: self.recent_blockhash,
            instructions,
        })
    }

    /// Serialize to wire format with every signature slot zeroed.
    ///
    /// Useful for inspecting the final byte size of a transaction before
    /// signing it.
    pub fn serialize_unsigned(&self) -> Result<Vec<u8>, WireError> {
        let message = self.compile()?;
        let message_bytes = message.serialize();
        let num_sigs = message.num_required_signatures as usize;

        let mut wire = Vec::with_capacity(1 + 64 * num_sigs + message_bytes.len());
        wire.extend_from_slice(&encode_compact_u16(num_sigs as u16));
        wire.extend_from_slice(&vec![0u8; 64 * num_sigs]);
        wire.extend_from_slice(&message_bytes);
        Ok(wire)
    }

    /// Sign with the given keypairs and serialize to wire format.
    ///
    /// Every required signer slot must be covered by a matching keypair;
    /// a missing one is a `Signing` error. Extra keypairs are ignored.
    pub fn sign(&self, signers: &[&Keypair]) -> Result<Vec<u8>, WireError> {
        let message = self.compile()?;
        let message_bytes = message.serialize();
        let num_sigs = message.num_required_signatures as usize;

        let mut wire = Vec::with_capacity(1 + 64 * num_sigs + message_bytes.len());
        wire.extend_from_slice(&encode_compact_u16(num_sigs as u16));

        // The first num_required_signatures account keys are the signer
        // slots, in order.
        for slot in &message.account_keys[..num_sigs] {
            let keypair = signers
                .iter()
                .find(|k| k.pubkey() == *slot)
                .ok_or_else(|| WireError::Signing(format!("missing signer for {slot}")))?;
            wire.extend_from_slice(&keypair.sign(&message_bytes));
        }

        wire.extend_from_slice(&message_bytes);
        Ok(wire)
    }
}

// ---------------------------------------------------------------------------
// Compiled message
// ---------------------------------------------------------------------------

/// A compiled transaction message: the bytes that get signed.
#[derive(Debug, Clone)]
pub struct Message {
    /// All account keys, in canonical order.
    pub account_keys: Vec<Pubkey>,
    /// Number of required signatures (the first N accounts are signers).
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,
    pub recent_blockhash: [u8; 32],
    pub instructions: Vec<CompiledInstruction>,
}

/// An instruction with account references replaced by u8 indices into the
/// message's `account_keys`.
#[derive(Debug, Clone)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

impl Message {
    /// Serialize the message to its wire layout.
    pub fn serialize(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);

        buf.push(self.num_required_signatures);
        buf.push(self.num_readonly_signed);
        buf.push(self.num_readonly_unsigned);

        buf.extend_from_slice(&encode_compact_u16(self.account_keys.len() as u16));
        for key in &self.account_keys {
            buf.extend_from_slice(key.as_bytes());
        }

        buf.extend_from_slice(&self.recent_blockhash);

        buf.extend_from_slice(&encode_compact_u16(self.instructions.len() as u16));
        for ix in &self.instructions {
            buf.push(ix.program_id_index);

            buf.extend_from_slice(&encode_compact_u16(ix.account_indices.len() as u16));
            buf.extend_from_slice(&ix.account_indices);

            buf.extend_from_slice(&encode_compact_u16(ix.data.len() as u16));
            buf.extend_from_slice(&ix.data);
        }

        buf
    }
}
