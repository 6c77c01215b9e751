use blockpad::{pad, regroup, unpad, BitSequence, PadOptions, PaddingAlgorithm};
use proptest::prelude::*;

const COUNTED: [PaddingAlgorithm; 5] = [
    PaddingAlgorithm::AnsiX923,
    PaddingAlgorithm::Incremental,
    PaddingAlgorithm::Iso7816_4,
    PaddingAlgorithm::Pkcs5_7,
    PaddingAlgorithm::W3C,
];

fn counted_algorithm() -> impl Strategy<Value = PaddingAlgorithm> {
    prop::sample::select(COUNTED.to_vec())
}

fn hex_string(bytes: &[u8]) -> Vec<u8> {
    hex::encode(bytes).into_bytes()
}

proptest! {
    #[test]
    fn counted_raw_roundtrip(
        data in prop::collection::vec(any::<u8>(), 0..64),
        algorithm in counted_algorithm(),
        block_size in 2usize..=32,
    ) {
        // Aligned input gets no trailer, so its last bytes could pass for one
        prop_assume!(data.len() % block_size != 0);
        let options = PadOptions::new(algorithm, block_size).raw(true);
        let padded = pad(&data, &options).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(unpad(&padded, &options).unwrap(), data);
    }

    #[test]
    fn counted_hex_roundtrip(
        bytes in prop::collection::vec(any::<u8>(), 1..32),
        algorithm in counted_algorithm(),
        block_size in 2usize..=16,
    ) {
        prop_assume!(bytes.len() % block_size != 0);
        let data = hex_string(&bytes);
        // All-01 digit strings classify as binary
        prop_assume!(!data.iter().all(|&b| b == b'0' || b == b'1'));
        let options = PadOptions::new(algorithm, block_size);
        let padded = pad(&data, &options).unwrap();
        prop_assert_eq!(padded.len() % (2 * block_size), 0);
        prop_assert_eq!(unpad(&padded, &options).unwrap(), data);
    }

    #[test]
    fn bit_roundtrip(
        digits in "[01]{1,40}",
        block_size in 2usize..=16,
    ) {
        // A one-bit trailer has no zeros to strip and is left in place
        prop_assume!(digits.len() % block_size != block_size - 1);
        let options = PadOptions::new(PaddingAlgorithm::Bit, block_size);
        let padded = pad(digits.as_bytes(), &options).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(unpad(&padded, &options).unwrap(), digits.as_bytes());
    }

    #[test]
    fn zero_raw_roundtrip_without_trailing_nul(
        mut data in prop::collection::vec(1u8..=255, 0..40),
        block_size in 1usize..=16,
    ) {
        data.push(b'~');
        let options = PadOptions::new(PaddingAlgorithm::Zero, block_size).raw(true);
        let padded = pad(&data, &options).unwrap();
        prop_assert_eq!(padded.len() % block_size, 0);
        prop_assert_eq!(unpad(&padded, &options).unwrap(), data);
    }

    #[test]
    fn zero_unpad_is_idempotent(
        bytes in prop::collection::vec(any::<u8>(), 0..32),
        block_size in 1usize..=16,
        raw in any::<bool>(),
    ) {
        let data = if raw { bytes } else { hex_string(&bytes) };
        let options = PadOptions::new(PaddingAlgorithm::Zero, block_size).raw(raw);
        let once = unpad(&data, &options).unwrap();
        let twice = unpad(&once, &options).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn pad_never_shrinks_and_keeps_prefix(
        data in prop::collection::vec(any::<u8>(), 0..48),
        algorithm in counted_algorithm(),
        block_size in 1usize..=32,
    ) {
        let options = PadOptions::new(algorithm, block_size).raw(true);
        let padded = pad(&data, &options).unwrap();
        prop_assert!(padded.len() >= data.len());
        prop_assert!(padded.len() - data.len() < block_size);
        prop_assert_eq!(&padded[..data.len()], &data[..]);
    }

    #[test]
    fn widening_regroup_is_always_exact(
        digits in "[01]{0,64}",
        from in 1usize..=8,
        extra in 0usize..=8,
    ) {
        let sequence = BitSequence::new(&digits, from).unwrap();
        let (wide, lossless) = regroup(&sequence, from + extra).unwrap();
        prop_assert!(lossless);
        prop_assert!(wide.is_exact());
        let (back, lossless) = regroup(&wide, from).unwrap();
        prop_assert!(lossless);
        prop_assert_eq!(back, sequence);
    }

    #[test]
    fn exactness_never_returns(
        digits in "1[01]{7}",
        widths in prop::collection::vec(1usize..=16, 1..6),
    ) {
        // The leading 1 bit of an 8-bit group is lost at width 4
        let (mut sequence, lossless) = regroup(&BitSequence::from_bits(&digits).unwrap(), 4).unwrap();
        prop_assert!(!lossless);
        for width in widths {
            let (next, _) = regroup(&sequence, width).unwrap();
            prop_assert!(!next.is_exact());
            sequence = next;
        }
    }
}
