use std::fmt;
use std::str::FromStr;

use crate::base32;
use crate::config::{MAX_OCTETS, TxIdConfig};
use crate::error::{Result, TxIdError};

/// A validated transaction ID together with the octets it encodes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedTxId {
    id: String,
    octets: Vec<u8>,
}

impl ParsedTxId {
    /// The normalized ID text.
    pub fn as_str(&self) -> &str {
        &self.id
    }

    /// The packed octets the ID was encoded from.
    pub fn octets(&self) -> &[u8] {
        &self.octets
    }

    /// Random bits carried by this ID, assuming it was cut from a UUIDv4.
    pub fn entropy_bits(&self) -> usize {
        crate::collision::entropy_bits(self.octets.len())
    }
}

impl fmt::Display for ParsedTxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}

impl FromStr for ParsedTxId {
    type Err = TxIdError;

    fn from_str(s: &str) -> Result<Self> {
        parse_tx_id(s)
    }
}

/// Normalizes an ID: trims whitespace, uppercases and drops `=` padding.
pub fn normalize_tx_id(id: &str) -> String {
    id.trim().trim_end_matches('=').to_ascii_uppercase()
}

/// Parses a transaction ID back into its packed octets.
///
/// Parsing rules:
/// - Normalize first (see [`normalize_tx_id`]), so lowercase and padded input is accepted
/// - Every character must be in the base32 alphabet `A-Z2-7`
/// - The length must be one an octet count can produce, with zero trailing bits
/// - At most 16 octets
///
/// # Errors
///
/// Returns `InvalidId` if any rule fails.
pub fn parse_tx_id(id: &str) -> Result<ParsedTxId> {
    let id = normalize_tx_id(id);

    if id.is_empty() {
        return Err(TxIdError::InvalidId { id });
    }

    let Some(octets) = base32::decode(&id) else {
        return Err(TxIdError::InvalidId { id });
    };

    if octets.len() > MAX_OCTETS {
        return Err(TxIdError::InvalidId { id });
    }

    Ok(ParsedTxId { id, octets })
}

/// Returns true if the given string parses as a transaction ID.
pub fn is_valid_tx_id(id: &str) -> bool {
    parse_tx_id(id).is_ok()
}

/// Validates that an ID carries the octets of a `character_length` generator.
///
/// # Errors
///
/// Returns `InvalidId` if the ID cannot be parsed.
/// Returns `LengthMismatch` if it decodes to a different octet count.
pub fn validate_length(id: &str, character_length: usize) -> Result<()> {
    let parsed = parse_tx_id(id)?;
    let expected = TxIdConfig::new(character_length).octet_count();

    if parsed.octets.len() == expected {
        return Ok(());
    }

    Err(TxIdError::LengthMismatch {
        expected,
        found: parsed.octets.len(),
    })
}
