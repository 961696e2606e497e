use std::io;

use thiserror::Error;

use crate::algorithm::AlgorithmId;
use crate::hasher::HasherState;

/// Everything that can go wrong while producing a digest.
///
/// Once bytes are in hand the hashing itself cannot fail, so every variant
/// here comes from a boundary: the byte source, the lifecycle guard, name
/// parsing, or a bad request for output.
#[derive(Debug, Error)]
pub enum HashError {
    /// The byte source could not be opened or read.
    #[error("cannot read {context}")]
    SourceUnavailable {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("unsupported hash algorithm {0:?}")]
    UnsupportedAlgorithm(String),

    #[error("invalid output length {requested}, at most {max} bytes may be requested")]
    InvalidOutputLength { requested: usize, max: usize },

    /// `update` after finalisation, or a second finalisation without a reset.
    #[error("cannot {operation} a hasher in the {state} state")]
    InvalidState {
        operation: &'static str,
        state: HasherState,
    },

    #[error("{0} has a fixed output size and cannot produce extendable output")]
    NotExtendable(AlgorithmId),

    /// The expected checksum handed to a verifier is empty or not a hex string.
    #[error("expected checksum {0:?} is not a non-empty hex string")]
    InvalidChecksum(String),
}

impl HashError {
    pub(crate) fn source_unavailable(context: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T, E = HashError> = std::result::Result<T, E>;
