#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TxIdError {
    #[error(
        "invalid character length {character_length}: maps to {octets} octets, expected 1 to 16"
    )]
    InvalidConfiguration { character_length: usize, octets: usize },

    #[error("invalid ID format: {id}")]
    InvalidId { id: String },

    #[error("length mismatch: expected {expected} octets, found {found}")]
    LengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, TxIdError>;
