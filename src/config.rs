use serde::{Deserialize, Serialize};

/// Characters produced when no length is configured.
pub const DEFAULT_CHARACTER_LENGTH: usize = 12;

/// Bits carried by one base32 character.
pub const BITS_PER_CHARACTER: usize = 5;

/// Octets available from the two 64-bit halves of a UUID.
pub const MAX_OCTETS: usize = 16;

/// Shortest length that keeps at least one octet.
pub const MIN_CHARACTER_LENGTH: usize = 2;

/// Longest length that still fits in `MAX_OCTETS`.
pub const MAX_CHARACTER_LENGTH: usize = (MAX_OCTETS * 8 + 7) / BITS_PER_CHARACTER;

/// How the bytes of each 64-bit half are laid into the packed buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ByteLayout {
    /// Shift amounts follow the absolute buffer index, wrapping every 64 bits.
    ///
    /// For a segment starting at a non-zero offset this rotates the half's
    /// bytes rather than dropping any of them.
    #[default]
    Absolute,
    /// Each half is written little-endian starting from its own byte 0.
    PerHalf,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TxIdConfig {
    pub character_length: usize,
    pub byte_layout: ByteLayout,
}

impl TxIdConfig {
    pub const fn new(character_length: usize) -> Self {
        Self {
            character_length,
            byte_layout: ByteLayout::Absolute,
        }
    }

    pub const fn character_length(mut self, len: usize) -> Self {
        self.character_length = len;
        self
    }

    pub const fn byte_layout(mut self, layout: ByteLayout) -> Self {
        self.byte_layout = layout;
        self
    }

    /// Raw octets kept from the UUID: `floor(character_length * 5 / 8)`.
    pub const fn octet_count(&self) -> usize {
        (self.character_length * BITS_PER_CHARACTER) / 8
    }
}

impl Default for TxIdConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CHARACTER_LENGTH)
    }
}
