#![allow(unused)]

use checksum_core::{AlgorithmId, Hasher};

/// Hash `data` in one update and return lowercase hex.
pub fn hex(algorithm: AlgorithmId, data: impl AsRef<[u8]>) -> String {
    checksum_core::hash(algorithm, data.as_ref()).to_hex()
}

/// Hash `data` fed through `update` in pieces of the given sizes, cycling
/// through `sizes` until the input runs out. Zero sizes become empty updates.
pub fn hex_chunked(algorithm: AlgorithmId, data: &[u8], sizes: &[usize]) -> String {
    assert!(sizes.iter().any(|&size| size > 0), "no progress possible");
    let mut hasher = Hasher::new(algorithm);
    let mut rest = data;
    for &size in sizes.iter().cycle() {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(size.min(rest.len()));
        hasher.update(chunk).expect("hasher is open");
        rest = tail;
    }
    hasher.finalize().expect("hasher is open").to_hex()
}

/// Table driven known answer tests: `vectors!(Algorithm, [(input, hex), ...])`.
macro_rules! vectors {
    ($algorithm:expr, [$(($input:expr, $expected:expr)),+ $(,)?]) => {
        $(
            assert_eq!(
                helpers::hex($algorithm, $input),
                $expected,
                "{} of {:?}",
                $algorithm,
                $input
            );
        )+
    };
}

pub(crate) use vectors;
