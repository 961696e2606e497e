//! Streaming message digests: MD2, MD4, MD5, SHA-1, the SHA-2 family, SHA-3
//! and SHAKE behind one [`Hasher`].
//!
//! ```
//! use checksum_core::{hash, AlgorithmId};
//!
//! let digest = hash(AlgorithmId::Sha1, b"abc");
//! assert_eq!(digest.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
//! ```

pub mod algorithm;
pub mod encoding;
pub mod error;
pub mod hasher;
mod keccak;
mod md;
pub mod source;
pub mod util;
pub mod verify;

pub use algorithm::{AlgorithmId, AlgorithmInfo, EngineKind};
pub use error::{HashError, Result};
pub use hasher::{Digest, Hasher, HasherState, MAX_SHAKE_OUTPUT};
pub use source::{hash, hash_file, hash_reader, hash_xof, CHUNK_SIZE};
pub use verify::{verify_digest, verify_file, verify_reader, Verification};
