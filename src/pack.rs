use crate::config::ByteLayout;

const HALF_OCTETS: usize = 8;

/// Pack the two UUID halves into `octet_count` bytes.
///
/// The least significant half carries the node and clock sequence bits, so it
/// always fills the tail of the buffer. Only when more than 8 octets are
/// requested does the most significant half contribute, at the front.
pub(crate) fn pack_halves(
    most: u64,
    least: u64,
    octet_count: usize,
    layout: ByteLayout,
) -> Vec<u8> {
    let mut buffer = vec![0u8; octet_count];

    if octet_count > HALF_OCTETS {
        let from_most = octet_count - HALF_OCTETS;
        write_octets(most, &mut buffer, 0, from_most, layout);
        write_octets(least, &mut buffer, from_most, HALF_OCTETS, layout);
    } else {
        write_octets(least, &mut buffer, 0, octet_count, layout);
    }

    buffer
}

/// Write `count` little-endian bytes of `value` into `buffer[offset..offset + count]`.
fn write_octets(value: u64, buffer: &mut [u8], offset: usize, count: usize, layout: ByteLayout) {
    let bytes = value.to_le_bytes();
    for (index, slot) in buffer.iter_mut().enumerate().skip(offset).take(count) {
        let position = match layout {
            // (value >> index * 8) with the shift taken mod 64
            ByteLayout::Absolute => index % HALF_OCTETS,
            ByteLayout::PerHalf => index - offset,
        };
        *slot = bytes[position];
    }
}
