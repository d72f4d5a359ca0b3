//! `create_v2` instruction payload encoding.
//!
//! The bonding curve program parses this layout positionally:
//!
//! ```text
//! u8   discriminator (1 = create_v2)
//! u8   mayhem flag (0 or 1)
//! u16  LE name length   : that many UTF-8 bytes
//! u16  LE symbol length : that many UTF-8 bytes
//! u16  LE uri length    : that many UTF-8 bytes
//! ```
//!
//! No padding, no terminators, no trailing fill — any extra or missing
//! byte desynchronizes the receiving parser.

use crate::error::BundlerError;

/// Discriminator of the bonding curve program's `create_v2` entry point.
pub const CREATE_V2_DISCRIMINATOR: u8 = 1;

/// Encode the `create_v2` payload.
///
/// Every string field is checked against the 16-bit length-prefix range
/// before anything is written; truncation is never an option.
pub fn encode_create_v2(
    mayhem_mode: bool,
    name: &str,
    symbol: &str,
    uri: &str,
) -> Result<Vec<u8>, BundlerError> {
    for (field, value) in [("name", name), ("symbol", symbol), ("uri", uri)] {
        if value.len() > u16::MAX as usize {
            return Err(BundlerError::Validation(format!(
                "{field} exceeds the 16-bit length prefix ({} bytes)",
                value.len()
            )));
        }
    }

    let mut data = Vec::with_capacity(2 + 6 + name.len() + symbol.len() + uri.len());
    data.push(CREATE_V2_DISCRIMINATOR);
    data.push(mayhem_mode as u8);
    for value in [name, symbol, uri] {
        data.extend_from_slice(&(value.len() as u16).to_le_bytes());
        data.extend_from_slice(value.as_bytes());
    }

    Ok(data)
}
