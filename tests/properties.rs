use checksum_core::{hash, hash_xof, AlgorithmId};
use proptest::prelude::*;

mod helpers;
use helpers::*;

fn algorithm() -> impl Strategy<Value = AlgorithmId> {
    proptest::sample::select(AlgorithmId::ALL.to_vec())
}

fn shake() -> impl Strategy<Value = AlgorithmId> {
    prop_oneof![Just(AlgorithmId::Shake128), Just(AlgorithmId::Shake256)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn streaming_matches_one_shot(
        algorithm in algorithm(),
        input in proptest::collection::vec(any::<u8>(), 0..600),
        sizes in proptest::collection::vec(0..200usize, 1..8),
    ) {
        prop_assume!(sizes.iter().any(|&size| size > 0));
        prop_assert_eq!(
            hex_chunked(algorithm, &input, &sizes),
            hash(algorithm, &input).to_hex()
        );
    }

    #[test]
    fn byte_at_a_time_matches_one_shot(
        algorithm in algorithm(),
        input in proptest::collection::vec(any::<u8>(), 0..300),
    ) {
        prop_assert_eq!(
            hex_chunked(algorithm, &input, &[1]),
            hash(algorithm, &input).to_hex()
        );
    }

    #[test]
    fn shake_output_is_a_prefix(
        algorithm in shake(),
        input in proptest::collection::vec(any::<u8>(), 0..300),
        short in 0..400usize,
        extra in 0..400usize,
    ) {
        let long = hash_xof(algorithm, &input, short + extra).unwrap();
        let short = hash_xof(algorithm, &input, short).unwrap();
        prop_assert_eq!(&long.as_bytes()[..short.len()], short.as_bytes());
    }

    #[test]
    fn hex_is_lowercase_and_fixed_width(
        algorithm in algorithm(),
        input in proptest::collection::vec(any::<u8>(), 0..100),
    ) {
        let hex = hash(algorithm, &input).to_hex();
        prop_assert_eq!(hex.len(), 2 * algorithm.info().default_output);
        prop_assert!(hex.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }
}
