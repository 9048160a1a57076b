mod base32;
pub mod collision;
pub mod config;
pub mod error;
pub mod generate;
mod pack;
pub mod parse;
pub mod source;

pub use error::{TxIdError, Result};
pub use config::{ByteLayout, TxIdConfig, DEFAULT_CHARACTER_LENGTH};
pub use generate::TxIdGenerator;
pub use parse::{ParsedTxId, parse_tx_id, is_valid_tx_id, normalize_tx_id, validate_length};
pub use source::{RandomSource, UuidV4Source};

/// Generate one ID of `character_length` characters from a random UUID.
///
/// # Errors
///
/// Returns `InvalidConfiguration` if the length maps to zero or more than 16 octets.
pub fn generate(character_length: usize) -> Result<String> {
    TxIdGenerator::with_length(character_length).map(|generator| generator.generate())
}
