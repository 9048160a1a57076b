/// RFC 4648 base32 alphabet.
pub(crate) const BASE32_ALPHABET: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

const PAD: char = '=';

/// Characters needed for `octets` bytes once padding is dropped.
pub(crate) const fn unpadded_len(octets: usize) -> usize {
    (octets * 8).div_ceil(5)
}

/// Encode bytes as RFC 4648 base32, padded to a multiple of 8 characters.
pub(crate) fn encode(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len().div_ceil(5) * 8);
    let mut bits = 0usize;
    let mut bit_count = 0u32;

    for &byte in data {
        bits = ((bits << 8) | usize::from(byte)) & 0xFFFF;
        bit_count += 8;

        while bit_count >= 5 {
            bit_count -= 5;
            result.push(char::from(BASE32_ALPHABET[(bits >> bit_count) & 0x1F]));
        }
    }

    // Flush remaining bits
    if bit_count > 0 {
        result.push(char::from(BASE32_ALPHABET[(bits << (5 - bit_count)) & 0x1F]));
    }

    while result.len() % 8 != 0 {
        result.push(PAD);
    }

    result
}

/// Drop `=` padding and surrounding whitespace from encoder output.
pub(crate) fn strip_padding(encoded: &str) -> &str {
    encoded.trim().trim_end_matches(PAD).trim_end()
}

fn decode_char(c: u8) -> Option<usize> {
    match c {
        b'A'..=b'Z' => Some(usize::from(c - b'A')),
        b'2'..=b'7' => Some(usize::from(c - b'2') + 26),
        _ => None,
    }
}

/// Decode unpadded uppercase base32.
///
/// Only canonical encodings are accepted: the leftover bits after the last
/// full byte must be fewer than five and all zero, which also rules out the
/// lengths no byte count can produce.
pub(crate) fn decode(encoded: &str) -> Option<Vec<u8>> {
    let mut result = Vec::with_capacity(encoded.len() * 5 / 8);
    let mut bits = 0usize;
    let mut bit_count = 0u32;

    for c in encoded.bytes() {
        bits = ((bits << 5) | decode_char(c)?) & 0xFFFF;
        bit_count += 5;

        if bit_count >= 8 {
            bit_count -= 8;
            result.push(((bits >> bit_count) & 0xFF).to_le_bytes()[0]);
        }
    }

    let leftover = bits & ((1 << bit_count) - 1);
    if bit_count >= 5 || leftover != 0 {
        return None;
    }

    Some(result)
}
