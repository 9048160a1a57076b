//! Property-based tests for packing and encoding.
//!
//! Uses injected halves to check that, for any 128-bit input and any valid
//! length, the generated ID stays in the base32 alphabet, has the predicted
//! length, and decodes to octets that come from the expected halves.

use compact_txid::{ByteLayout, TxIdConfig, TxIdGenerator, parse_tx_id};
use proptest::prelude::*;

fn layout_strategy() -> impl Strategy<Value = ByteLayout> {
    prop_oneof![Just(ByteLayout::Absolute), Just(ByteLayout::PerHalf)]
}

proptest! {
    #[test]
    fn prop_alphabet_and_length(
        most in any::<u64>(),
        least in any::<u64>(),
        length in 2usize..=27,
        layout in layout_strategy(),
    ) {
        let config = TxIdConfig::new(length).byte_layout(layout);
        let generator = TxIdGenerator::with_source(config, move || (most, least)).unwrap();
        let id = generator.generate();

        prop_assert_eq!(id.len(), generator.encoded_len());
        prop_assert!(id.len() <= length);
        for c in id.chars() {
            prop_assert!(
                c.is_ascii_uppercase() || ('2'..='7').contains(&c),
                "invalid character {} in {}", c, id
            );
        }
    }

    #[test]
    fn prop_short_ids_are_least_prefix(
        most in any::<u64>(),
        least in any::<u64>(),
        length in 2usize..=14,
        layout in layout_strategy(),
    ) {
        let config = TxIdConfig::new(length).byte_layout(layout);
        let generator = TxIdGenerator::with_source(config, move || (most, least)).unwrap();
        let parsed = parse_tx_id(&generator.generate()).unwrap();
        let octets = generator.octet_count();

        prop_assert_eq!(parsed.octets(), &least.to_le_bytes()[..octets]);
    }

    #[test]
    fn prop_long_ids_keep_most_prefix(
        most in any::<u64>(),
        least in any::<u64>(),
        length in 15usize..=27,
        layout in layout_strategy(),
    ) {
        let config = TxIdConfig::new(length).byte_layout(layout);
        let generator = TxIdGenerator::with_source(config, move || (most, least)).unwrap();
        let parsed = parse_tx_id(&generator.generate()).unwrap();
        let from_most = generator.octet_count() - 8;

        prop_assert_eq!(&parsed.octets()[..from_most], &most.to_le_bytes()[..from_most]);

        let mut tail = parsed.octets()[from_most..].to_vec();
        let mut expected = least.to_le_bytes().to_vec();
        if layout == ByteLayout::PerHalf {
            prop_assert_eq!(&tail, &expected);
        }
        tail.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(tail, expected);
    }
}
