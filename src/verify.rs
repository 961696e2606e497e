//! Checking a computed digest against an expected checksum.
//!
//! A mismatch is an answer, not a failure: it comes back as
//! `Ok(Verification::Mismatch { .. })`. Errors are reserved for unreadable
//! sources and malformed expected values.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::algorithm::AlgorithmId;
use crate::encoding::Decodable;
use crate::error::{HashError, Result};
use crate::hasher::Digest;
use crate::source::{hash_reader, CHUNK_SIZE};

/// Outcome of comparing a computed digest with the expected one.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Verification {
    Match { digest: String },
    Mismatch { expected: String, actual: String },
}

impl Verification {
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match { .. })
    }

    /// The digest that was computed, in lowercase hex.
    pub fn actual(&self) -> &str {
        match self {
            Verification::Match { digest } => digest,
            Verification::Mismatch { actual, .. } => actual,
        }
    }
}

/// Trim and lowercase an expected checksum, rejecting anything that is empty
/// or not hex.
fn normalise_expected(expected: &str) -> Result<String> {
    let expected = expected.trim().to_ascii_lowercase();
    if expected.is_empty() {
        return Err(HashError::InvalidChecksum(expected));
    }
    expected
        .decode_hex()
        .map_err(|_| HashError::InvalidChecksum(expected.clone()))?;
    Ok(expected)
}

/// Compare `digest` with an expected hex checksum, ignoring case and
/// surrounding whitespace.
pub fn verify_digest(digest: &Digest, expected: &str) -> Result<Verification> {
    let expected = normalise_expected(expected)?;
    let actual = digest.to_hex();

    if actual == expected {
        debug!(digest = %actual, "checksum verification passed");
        Ok(Verification::Match { digest: actual })
    } else {
        warn!(%expected, %actual, "checksum verification failed");
        Ok(Verification::Mismatch { expected, actual })
    }
}

/// Hash `reader` and verify the result.
///
/// For SHAKE the output length is taken from the expected checksum, so any
/// length the publisher chose can be checked.
pub fn verify_reader<R: Read>(
    algorithm: AlgorithmId,
    reader: R,
    expected: &str,
    context: &str,
) -> Result<Verification> {
    let normalised = normalise_expected(expected)?;
    let output_len = algorithm.is_extendable().then(|| normalised.len() / 2);
    let digest = hash_reader(algorithm, reader, output_len, context)?;
    verify_digest(&digest, &normalised)
}

/// Hash the file at `path` and verify the result.
pub fn verify_file(
    algorithm: AlgorithmId,
    path: impl AsRef<Path>,
    expected: &str,
) -> Result<Verification> {
    let path = path.as_ref();
    let context = path.display().to_string();
    let file = std::fs::File::open(path)
        .map_err(|e| HashError::source_unavailable(&context, e))?;
    debug!(path = %context, chunk_size = CHUNK_SIZE, "verifying file");
    verify_reader(algorithm, file, expected, &context)
}
