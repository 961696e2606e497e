//! The streaming façade shared by every algorithm.
//!
//! A [`Hasher`] moves through `Created -> Absorbing -> Finalized`. It accepts
//! any number of [`Hasher::update`] calls, produces exactly one digest through
//! [`Hasher::finalize`] or [`Hasher::shake`], and must be [`Hasher::reset`]
//! before it can be used again.

use std::fmt;
use std::io;

use crate::algorithm::{AlgorithmId, EngineKind};
use crate::encoding::Encodable;
use crate::error::{HashError, Result};
use crate::keccak::Sponge;
use crate::md::md2::{self, Md2};
use crate::md::md4::{self, Md4};
use crate::md::md5::{self, Md5};
use crate::md::sha1::{self, Sha1};
use crate::md::sha2::{context as sha2_context, Sha256, Sha512};
use crate::md::{Compression, MdCore};

/// Largest output a single SHAKE request may ask for, 64 MiB.
pub const MAX_SHAKE_OUTPUT: usize = 64 * 1024 * 1024;

/// Where a [`Hasher`] is in its lifecycle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HasherState {
    /// Fresh, or just reset: nothing absorbed yet.
    Created,
    /// At least one update since creation or reset.
    Absorbing,
    /// A digest has been produced; only `reset` is allowed.
    Finalized,
}

impl fmt::Display for HasherState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HasherState::Created => "created",
            HasherState::Absorbing => "absorbing",
            HasherState::Finalized => "finalized",
        };
        f.write_str(name)
    }
}

/// The concrete engine behind a [`Hasher`].
///
/// SHA-224 shares the SHA-256 compression and SHA-384/512/224/512/256 share
/// the SHA-512 one; the algorithm id decides the IV and how many bytes of
/// the final state are emitted.
#[derive(Debug, Clone)]
enum Engine {
    Md2(Md2),
    Md4(MdCore<Md4>),
    Md5(MdCore<Md5>),
    Sha1(MdCore<Sha1>),
    Sha256(MdCore<Sha256>),
    Sha512(MdCore<Sha512>),
    Keccak(Sponge),
}

impl Engine {
    fn new(algorithm: AlgorithmId) -> Self {
        use AlgorithmId as A;

        match algorithm {
            A::Md2 => Engine::Md2(Md2::new()),
            A::Md4 => Engine::Md4(MdCore::new(md4::context::INIT_STATE)),
            A::Md5 => Engine::Md5(MdCore::new(md5::context::INIT_STATE)),
            A::Sha1 => Engine::Sha1(MdCore::new(sha1::context::INIT_STATE)),
            A::Sha224 => Engine::Sha256(MdCore::new(sha2_context::sha224::INIT_STATE)),
            A::Sha256 => Engine::Sha256(MdCore::new(sha2_context::sha256::INIT_STATE)),
            A::Sha384 => Engine::Sha512(MdCore::new(sha2_context::sha384::INIT_STATE)),
            A::Sha512 => Engine::Sha512(MdCore::new(sha2_context::sha512::INIT_STATE)),
            A::Sha512_224 => Engine::Sha512(MdCore::new(sha2_context::sha512_224::INIT_STATE)),
            A::Sha512_256 => Engine::Sha512(MdCore::new(sha2_context::sha512_256::INIT_STATE)),
            A::Sha3_224 => Engine::Keccak(Sponge::sha3(224)),
            A::Sha3_256 => Engine::Keccak(Sponge::sha3(256)),
            A::Sha3_384 => Engine::Keccak(Sponge::sha3(384)),
            A::Sha3_512 => Engine::Keccak(Sponge::sha3(512)),
            A::Shake128 => Engine::Keccak(Sponge::shake(128)),
            A::Shake256 => Engine::Keccak(Sponge::shake(256)),
        }
    }

    fn update(&mut self, data: &[u8]) {
        match self {
            Engine::Md2(e) => e.update(data),
            Engine::Md4(e) => e.update(data),
            Engine::Md5(e) => e.update(data),
            Engine::Sha1(e) => e.update(data),
            Engine::Sha256(e) => e.update(data),
            Engine::Sha512(e) => e.update(data),
            Engine::Keccak(e) => e.update(data),
        }
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        match self {
            Engine::Md2(e) => e.finalize_into(out),
            Engine::Md4(e) => e.finalize_into(out),
            Engine::Md5(e) => e.finalize_into(out),
            Engine::Sha1(e) => e.finalize_into(out),
            Engine::Sha256(e) => e.finalize_into(out),
            Engine::Sha512(e) => e.finalize_into(out),
            Engine::Keccak(e) => e.squeeze(out),
        }
    }

    fn reset(&mut self) {
        match self {
            Engine::Md2(e) => e.reset(),
            Engine::Md4(e) => e.reset(),
            Engine::Md5(e) => e.reset(),
            Engine::Sha1(e) => e.reset(),
            Engine::Sha256(e) => e.reset(),
            Engine::Sha512(e) => e.reset(),
            Engine::Keccak(e) => e.reset(),
        }
    }

    fn bytes_processed(&self) -> u128 {
        match self {
            Engine::Md2(e) => e.bytes_processed(),
            Engine::Md4(e) => e.bytes_processed(),
            Engine::Md5(e) => e.bytes_processed(),
            Engine::Sha1(e) => e.bytes_processed(),
            Engine::Sha256(e) => e.bytes_processed(),
            Engine::Sha512(e) => e.bytes_processed(),
            Engine::Keccak(e) => e.bytes_processed(),
        }
    }

    fn kind(&self) -> EngineKind {
        match self {
            Engine::Md2(_) => EngineKind::Md2,
            Engine::Md4(_) | Engine::Md5(_) | Engine::Sha1(_) | Engine::Sha256(_) => {
                EngineKind::MerkleDamgard32
            }
            Engine::Sha512(_) => EngineKind::MerkleDamgard64,
            Engine::Keccak(_) => EngineKind::Keccak,
        }
    }

    /// Bytes per compression, or the sponge rate.
    fn block_size(&self) -> usize {
        match self {
            Engine::Md2(_) => md2::context::BLOCK_SIZE,
            Engine::Md4(_) => Md4::BLOCK_SIZE,
            Engine::Md5(_) => Md5::BLOCK_SIZE,
            Engine::Sha1(_) => Sha1::BLOCK_SIZE,
            Engine::Sha256(_) => Sha256::BLOCK_SIZE,
            Engine::Sha512(_) => Sha512::BLOCK_SIZE,
            Engine::Keccak(e) => e.rate(),
        }
    }

    /// Finish and return `len` bytes of output. The caller picks `len`.
    fn digest(&mut self, len: usize) -> Digest {
        let mut bytes = vec![0; len];
        self.finalize_into(&mut bytes);
        Digest { bytes }
    }
}

/// The output of a hash: raw bytes plus their lowercase hex rendering.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Digest {
    bytes: Vec<u8>,
}

impl Digest {
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Only a zero length SHAKE request produces an empty digest.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn to_hex(&self) -> String {
        self.bytes.encode_hex()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Encodable for Digest {
    fn encode_hex(&self) -> String {
        self.to_hex()
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A streaming hasher for any [`AlgorithmId`].
///
/// ```
/// use checksum_core::{AlgorithmId, Hasher};
///
/// let mut hasher = Hasher::new(AlgorithmId::Sha256);
/// hasher.update(b"a")?;
/// hasher.update(b"bc")?;
/// assert_eq!(
///     hasher.finalize()?.to_hex(),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// # Ok::<(), checksum_core::HashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Hasher {
    algorithm: AlgorithmId,
    engine: Engine,
    state: HasherState,
}

impl Hasher {
    pub fn new(algorithm: AlgorithmId) -> Self {
        let engine = Engine::new(algorithm);
        let info = algorithm.info();
        debug_assert_eq!(engine.kind(), info.engine, "{algorithm}");
        debug_assert_eq!(engine.block_size(), info.block_size, "{algorithm}");
        Self {
            algorithm,
            engine,
            state: HasherState::Created,
        }
    }

    pub fn algorithm(&self) -> AlgorithmId {
        self.algorithm
    }

    pub fn state(&self) -> HasherState {
        self.state
    }

    /// Total message bytes absorbed since creation or the last reset.
    pub fn bytes_processed(&self) -> u128 {
        self.engine.bytes_processed()
    }

    fn ensure_open(&self, operation: &'static str) -> Result<()> {
        if self.state == HasherState::Finalized {
            return Err(HashError::InvalidState {
                operation,
                state: self.state,
            });
        }
        Ok(())
    }

    /// Absorb more input. Chunk boundaries never affect the digest.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        self.ensure_open("update")?;
        self.engine.update(data);
        self.state = HasherState::Absorbing;
        Ok(())
    }

    /// Produce the digest at the algorithm's fixed size, or its default
    /// length for SHAKE.
    pub fn finalize(&mut self) -> Result<Digest> {
        self.ensure_open("finalize")?;
        let len = self.algorithm.info().default_output;
        self.state = HasherState::Finalized;
        Ok(self.engine.digest(len))
    }

    /// Produce `output_len` bytes of extendable output. SHAKE only.
    pub fn shake(&mut self, output_len: usize) -> Result<Digest> {
        if !self.algorithm.is_extendable() {
            return Err(HashError::NotExtendable(self.algorithm));
        }
        check_shake_len(output_len)?;
        self.ensure_open("finalize")?;
        self.state = HasherState::Finalized;
        Ok(self.engine.digest(output_len))
    }

    /// Back to `Created` with the original IV, an empty buffer and a zero
    /// byte count.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.state = HasherState::Created;
    }
}

/// Hash `data` in one go, skipping the lifecycle guard. `output_len` must
/// already be valid for `algorithm`.
pub(crate) fn oneshot(algorithm: AlgorithmId, data: &[u8], output_len: usize) -> Digest {
    let mut engine = Engine::new(algorithm);
    engine.update(data);
    engine.digest(output_len)
}

pub(crate) fn check_shake_len(output_len: usize) -> Result<()> {
    if output_len > MAX_SHAKE_OUTPUT {
        return Err(HashError::InvalidOutputLength {
            requested: output_len,
            max: MAX_SHAKE_OUTPUT,
        });
    }
    Ok(())
}

impl io::Write for Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.update(buf).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
