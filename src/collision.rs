//! Birthday-bound estimates for truncated UUIDv4 identifiers.
//!
//! A version 4 UUID fixes six of its 128 bits: the version nibble sits in
//! bits 12..16 of the most significant half and the variant in the top two
//! bits of the least significant half. Whether those land in an identifier
//! depends on how many octets are kept, so the usable entropy is slightly
//! below `octets * 8` for the longer configurations.

use crate::config::{
    BITS_PER_CHARACTER, MAX_CHARACTER_LENGTH, MAX_OCTETS, MIN_CHARACTER_LENGTH,
};

const VERSION_BITS: usize = 4;
const VARIANT_BITS: usize = 2;

/// Random bits carried by `octets` packed octets of a UUIDv4.
pub const fn entropy_bits(octets: usize) -> usize {
    let octets = if octets > MAX_OCTETS { MAX_OCTETS } else { octets };
    let mut bits = octets * 8;
    if octets >= 8 {
        bits -= VARIANT_BITS;
    }
    // the version nibble is in byte 1 of the most significant half
    if octets >= 10 {
        bits -= VERSION_BITS;
    }
    bits
}

/// Probability that `item_count` identifiers over `entropy_bits` random bits
/// contain at least one duplicate.
///
/// Uses `P = 1 - e^(-n^2 / 2d)` with `d = 2^entropy_bits`.
#[allow(clippy::cast_precision_loss)]
pub fn collision_probability(entropy_bits: usize, item_count: u64) -> f64 {
    let n = item_count as f64;
    let d = (entropy_bits as f64).exp2();
    -(-(n * n) / (2.0 * d)).exp_m1()
}

/// Shortest character length whose collision probability for `item_count`
/// identifiers stays below `max_collision_prob`.
///
/// Returns `None` when even the full 16 octets are not enough.
pub fn shortest_length(item_count: u64, max_collision_prob: f64) -> Option<usize> {
    (MIN_CHARACTER_LENGTH..=MAX_CHARACTER_LENGTH).find(|&length| {
        let octets = length * BITS_PER_CHARACTER / 8;
        collision_probability(entropy_bits(octets), item_count) < max_collision_prob
    })
}
