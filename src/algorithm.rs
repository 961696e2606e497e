//! The digest registry: every supported algorithm, the engine that runs it and
//! the shape of its output.

use std::fmt;
use std::str::FromStr;

use crate::error::HashError;

/// Selects one of the supported hash algorithms.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum AlgorithmId {
    Md2,
    Md4,
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
    Sha512_224,
    Sha512_256,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
    Shake128,
    Shake256,
}

/// The engine family an algorithm runs on.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum EngineKind {
    /// Byte oriented MD2 with its trailing checksum block.
    Md2,
    /// Merkle–Damgård over 32-bit words: MD4, MD5, SHA-1, SHA-224/256.
    MerkleDamgard32,
    /// Merkle–Damgård over 64-bit words: SHA-384/512 and the truncated variants.
    MerkleDamgard64,
    /// The Keccak sponge: SHA-3 and SHAKE.
    Keccak,
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EngineKind::Md2 => "md2",
            EngineKind::MerkleDamgard32 => "merkle-damgard/32",
            EngineKind::MerkleDamgard64 => "merkle-damgard/64",
            EngineKind::Keccak => "keccak",
        };
        f.write_str(name)
    }
}

/// Static description of one algorithm.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AlgorithmInfo {
    pub id: AlgorithmId,
    pub engine: EngineKind,
    /// Bytes consumed per compression, or the rate for the sponge family.
    pub block_size: usize,
    /// Fixed digest length in bytes, `None` for the extendable output functions.
    pub digest_size: Option<usize>,
    /// Bytes produced when no length is requested.
    pub default_output: usize,
    /// Sponge capacity in bits.
    pub capacity: Option<usize>,
}

impl AlgorithmInfo {
    const fn fixed(id: AlgorithmId, engine: EngineKind, block_size: usize, digest_size: usize) -> Self {
        Self {
            id,
            engine,
            block_size,
            digest_size: Some(digest_size),
            default_output: digest_size,
            capacity: None,
        }
    }

    const fn sha3(id: AlgorithmId, digest_size: usize) -> Self {
        let capacity = 2 * digest_size * 8;
        Self {
            id,
            engine: EngineKind::Keccak,
            block_size: 200 - capacity / 8,
            digest_size: Some(digest_size),
            default_output: digest_size,
            capacity: Some(capacity),
        }
    }

    const fn shake(id: AlgorithmId, security_bits: usize, default_output: usize) -> Self {
        let capacity = 2 * security_bits;
        Self {
            id,
            engine: EngineKind::Keccak,
            block_size: 200 - capacity / 8,
            digest_size: None,
            default_output,
            capacity: Some(capacity),
        }
    }

    /// Bytes absorbed per permutation, for the sponge family.
    pub fn rate(&self) -> Option<usize> {
        self.capacity.map(|_| self.block_size)
    }

    pub fn is_extendable(&self) -> bool {
        self.digest_size.is_none()
    }
}

use AlgorithmId::*;

#[rustfmt::skip]
static REGISTRY: [AlgorithmInfo; 16] = [
    AlgorithmInfo::fixed(Md2,        EngineKind::Md2,             16,  16),
    AlgorithmInfo::fixed(Md4,        EngineKind::MerkleDamgard32, 64,  16),
    AlgorithmInfo::fixed(Md5,        EngineKind::MerkleDamgard32, 64,  16),
    AlgorithmInfo::fixed(Sha1,       EngineKind::MerkleDamgard32, 64,  20),
    AlgorithmInfo::fixed(Sha224,     EngineKind::MerkleDamgard32, 64,  28),
    AlgorithmInfo::fixed(Sha256,     EngineKind::MerkleDamgard32, 64,  32),
    AlgorithmInfo::fixed(Sha384,     EngineKind::MerkleDamgard64, 128, 48),
    AlgorithmInfo::fixed(Sha512,     EngineKind::MerkleDamgard64, 128, 64),
    AlgorithmInfo::fixed(Sha512_224, EngineKind::MerkleDamgard64, 128, 28),
    AlgorithmInfo::fixed(Sha512_256, EngineKind::MerkleDamgard64, 128, 32),
    AlgorithmInfo::sha3(Sha3_224, 28),
    AlgorithmInfo::sha3(Sha3_256, 32),
    AlgorithmInfo::sha3(Sha3_384, 48),
    AlgorithmInfo::sha3(Sha3_512, 64),
    AlgorithmInfo::shake(Shake128, 128, 32),
    AlgorithmInfo::shake(Shake256, 256, 64),
];

impl AlgorithmId {
    /// Every supported algorithm, in registry order.
    pub const ALL: [AlgorithmId; 16] = [
        Md2, Md4, Md5, Sha1, Sha224, Sha256, Sha384, Sha512, Sha512_224, Sha512_256, Sha3_224,
        Sha3_256, Sha3_384, Sha3_512, Shake128, Shake256,
    ];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Md2 => "md2",
            Md4 => "md4",
            Md5 => "md5",
            Sha1 => "sha1",
            Sha224 => "sha224",
            Sha256 => "sha256",
            Sha384 => "sha384",
            Sha512 => "sha512",
            Sha512_224 => "sha512/224",
            Sha512_256 => "sha512/256",
            Sha3_224 => "sha3-224",
            Sha3_256 => "sha3-256",
            Sha3_384 => "sha3-384",
            Sha3_512 => "sha3-512",
            Shake128 => "shake128",
            Shake256 => "shake256",
        }
    }

    pub fn info(self) -> &'static AlgorithmInfo {
        &REGISTRY[self as usize]
    }

    pub fn engine(self) -> EngineKind {
        self.info().engine
    }

    pub fn digest_size(self) -> Option<usize> {
        self.info().digest_size
    }

    pub fn is_extendable(self) -> bool {
        self.info().is_extendable()
    }
}

impl fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Lowercase and drop the separators people put in algorithm names, so
/// `SHA-512/256`, `sha512_256` and `sha512256` all compare equal.
fn normalise(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | '/'))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl FromStr for AlgorithmId {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = normalise(s);
        AlgorithmId::ALL
            .into_iter()
            .find(|id| normalise(id.name()) == wanted)
            .ok_or_else(|| HashError::UnsupportedAlgorithm(s.to_string()))
    }
}
