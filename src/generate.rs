use tracing::{debug, trace, warn};

use crate::base32;
use crate::collision;
use crate::config::{ByteLayout, MAX_OCTETS, TxIdConfig};
use crate::error::{Result, TxIdError};
use crate::pack::pack_halves;
use crate::parse::parse_tx_id;
use crate::source::{RandomSource, UuidV4Source};

/// Compact transaction ID generator.
///
/// Each call truncates a fresh 128-bit random value to the configured number
/// of octets and encodes it as unpadded RFC 4648 base32. The generator holds
/// no mutable state and can be shared across threads.
#[derive(Debug, Clone)]
pub struct TxIdGenerator<S = UuidV4Source> {
    config: TxIdConfig,
    octet_count: usize,
    source: S,
}

impl TxIdGenerator {
    /// Create a generator backed by random UUIDs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if the length maps to zero octets or to
    /// more than the 16 a UUID provides.
    pub fn new(config: TxIdConfig) -> Result<Self> {
        Self::with_source(config, UuidV4Source)
    }

    /// Create a generator for `character_length` characters with the default layout.
    ///
    /// # Errors
    ///
    /// Same as [`TxIdGenerator::new`].
    pub fn with_length(character_length: usize) -> Result<Self> {
        Self::new(TxIdConfig::new(character_length))
    }
}

impl Default for TxIdGenerator {
    fn default() -> Self {
        let config = TxIdConfig::default();
        Self {
            octet_count: config.octet_count(),
            config,
            source: UuidV4Source,
        }
    }
}

impl<S: RandomSource> TxIdGenerator<S> {
    /// Create a generator drawing its random halves from `source`.
    ///
    /// # Errors
    ///
    /// Same as [`TxIdGenerator::new`].
    pub fn with_source(config: TxIdConfig, source: S) -> Result<Self> {
        let octet_count = config.octet_count();
        if octet_count == 0 || octet_count > MAX_OCTETS {
            warn!(
                character_length = config.character_length,
                octet_count, "rejecting transaction ID length"
            );
            return Err(TxIdError::InvalidConfiguration {
                character_length: config.character_length,
                octets: octet_count,
            });
        }

        debug!(
            character_length = config.character_length,
            octet_count,
            layout = ?config.byte_layout,
            "created transaction ID generator"
        );

        Ok(Self {
            config,
            octet_count,
            source,
        })
    }

    /// Generate a new identifier.
    ///
    /// The result is `encoded_len()` characters from `A-Z2-7`. That equals
    /// the configured length for 12, 16 and 20, and is shorter for lengths
    /// whose octets do not fill the last base32 character (14 gives 13).
    ///
    /// # Panics
    ///
    /// Panics if the random source cannot produce entropy.
    pub fn generate(&self) -> String {
        let (most, least) = self.source.next_halves();
        let id = self.encode_halves(most, least);
        trace!(%id, "generated transaction ID");
        id
    }

    /// Encode a given pair of halves the way [`generate`](Self::generate) does.
    pub fn encode_halves(&self, most: u64, least: u64) -> String {
        let packed = pack_halves(most, least, self.octet_count, self.config.byte_layout);
        let encoded = base32::encode(&packed);
        base32::strip_padding(&encoded).to_string()
    }

    pub const fn character_length(&self) -> usize {
        self.config.character_length
    }

    pub const fn octet_count(&self) -> usize {
        self.octet_count
    }

    pub const fn byte_layout(&self) -> ByteLayout {
        self.config.byte_layout
    }

    pub const fn config(&self) -> &TxIdConfig {
        &self.config
    }

    /// Exact length of every identifier this generator produces.
    pub const fn encoded_len(&self) -> usize {
        base32::unpadded_len(self.octet_count)
    }

    /// Chance that `item_count` identifiers from this generator contain a duplicate.
    pub fn collision_probability(&self, item_count: u64) -> f64 {
        collision::collision_probability(collision::entropy_bits(self.octet_count), item_count)
    }

    /// Returns true if `id` is well-formed and carries this generator's octet count.
    pub fn accepts(&self, id: &str) -> bool {
        parse_tx_id(id).is_ok_and(|parsed| parsed.octets().len() == self.octet_count)
    }
}
