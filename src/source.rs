//! Feeding bytes into a [`Hasher`] from memory, readers and files.
//!
//! Readers and files are consumed in [`CHUNK_SIZE`] pieces so memory use
//! stays bounded however large the input is.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use crate::algorithm::AlgorithmId;
use crate::error::{HashError, Result};
use crate::hasher::{check_shake_len, oneshot, Digest, Hasher};

/// Bytes read from a source per update.
pub const CHUNK_SIZE: usize = 8 * 1024;

/// Hash an in-memory buffer at the algorithm's default output size.
pub fn hash(algorithm: AlgorithmId, data: &[u8]) -> Digest {
    oneshot(algorithm, data, algorithm.info().default_output)
}

/// Hash an in-memory buffer with an explicit SHAKE output length.
pub fn hash_xof(algorithm: AlgorithmId, data: &[u8], output_len: usize) -> Result<Digest> {
    validate_output(algorithm, Some(output_len))?;
    Ok(oneshot(algorithm, data, output_len))
}

/// `output_len` is only meaningful for SHAKE, and must be in range.
fn validate_output(algorithm: AlgorithmId, output_len: Option<usize>) -> Result<()> {
    if let Some(len) = output_len {
        if !algorithm.is_extendable() {
            return Err(HashError::NotExtendable(algorithm));
        }
        check_shake_len(len)?;
    }
    Ok(())
}

/// Hash everything `reader` yields until end of input.
///
/// `output_len` selects the SHAKE output length; `None` uses the algorithm's
/// default. `context` names the source in errors and logs.
pub fn hash_reader<R: Read>(
    algorithm: AlgorithmId,
    mut reader: R,
    output_len: Option<usize>,
    context: &str,
) -> Result<Digest> {
    validate_output(algorithm, output_len)?;
    debug!(%algorithm, source = context, "hashing");

    let mut hasher = Hasher::new(algorithm);
    let mut buffer = [0u8; CHUNK_SIZE];
    loop {
        let read = match reader.read(&mut buffer) {
            Ok(0) => break,
            Ok(read) => read,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(HashError::source_unavailable(context, e)),
        };
        hasher.update(&buffer[..read])?;
    }

    let bytes = hasher.bytes_processed();
    let digest = match output_len {
        Some(len) => hasher.shake(len)?,
        None => hasher.finalize()?,
    };
    debug!(%algorithm, source = context, bytes, digest = %digest, "hashed");
    Ok(digest)
}

/// Hash a file from disk, streaming it in [`CHUNK_SIZE`] pieces.
pub fn hash_file(
    algorithm: AlgorithmId,
    path: impl AsRef<Path>,
    output_len: Option<usize>,
) -> Result<Digest> {
    let path = path.as_ref();
    let context = path.display().to_string();
    let file = File::open(path).map_err(|e| HashError::source_unavailable(&context, e))?;
    hash_reader(algorithm, file, output_len, &context)
}
