//! The Merkle–Damgård family: iterate a compression function over fixed size
//! blocks, then strengthen the final block with the message bit length.
//!
//! MD4, MD5, SHA-1 and SHA-2 all share [`MdCore`] and differ only in their
//! [`Compression`]. MD2 predates length strengthening and lives on its own in
//! [`md2`].

macro_rules! Ch {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ (!$x & $z)
    };
}

macro_rules! Maj {
    ($x:expr, $y:expr, $z:expr) => {
        ($x & $y) ^ ($x & $z) ^ ($y & $z)
    };
}

macro_rules! Parity {
    ($x:expr, $y:expr, $z:expr) => {
        $x ^ $y ^ $z
    };
}

pub(crate) mod md2;
pub(crate) mod md4;
pub(crate) mod md5;
pub(crate) mod sha1;
pub(crate) mod sha2;

use std::fmt;

use crate::util::{store_words, Endian, Word};

/// Largest block of any variant (SHA-384/512).
pub(crate) const MAX_BLOCK_SIZE: usize = 128;

/// Largest chaining state of any variant, in bytes (eight 64-bit words).
const MAX_STATE_BYTES: usize = 64;

/// One member of the family: its word type, block shape and compression function.
pub(crate) trait Compression {
    type Word: Word;
    type State: Copy + fmt::Debug + AsRef<[Self::Word]>;

    const BLOCK_SIZE: usize;

    /// Width of the trailing bit-length field, 8 or 16 bytes.
    const LENGTH_SIZE: usize;

    /// Byte order of message words, the length field and the output.
    const ENDIAN: Endian;

    /// Mix exactly one block into the chaining state.
    fn compress(state: &mut Self::State, block: &[u8]);
}

/// Buffers input into whole blocks and drives a [`Compression`].
#[derive(Clone, Debug)]
pub(crate) struct MdCore<C: Compression> {
    iv: C::State,
    state: C::State,
    buffer: [u8; MAX_BLOCK_SIZE],
    buffered: usize,
    message_length: u128,
}

impl<C: Compression> MdCore<C> {
    pub(crate) fn new(iv: C::State) -> Self {
        debug_assert!(C::BLOCK_SIZE <= MAX_BLOCK_SIZE);
        Self {
            iv,
            state: iv,
            buffer: [0; MAX_BLOCK_SIZE],
            buffered: 0,
            message_length: 0,
        }
    }

    pub(crate) fn bytes_processed(&self) -> u128 {
        self.message_length
    }

    pub(crate) fn update(&mut self, mut data: &[u8]) {
        self.message_length = self.message_length.wrapping_add(data.len() as u128);

        // Top up a partially filled block first
        if self.buffered > 0 {
            let take = (C::BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < C::BLOCK_SIZE {
                return;
            }
            C::compress(&mut self.state, &self.buffer[..C::BLOCK_SIZE]);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(C::BLOCK_SIZE);
        for block in &mut blocks {
            C::compress(&mut self.state, block);
        }

        let remaining = blocks.remainder();
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffered = remaining.len();
    }

    /// Pad the message, compress the final block(s) and write the leading
    /// `out.len()` bytes of the serialised state into `out`.
    pub(crate) fn finalize_into(&mut self, out: &mut [u8]) {
        let bit_length = self.message_length << 3;
        let length_offset = C::BLOCK_SIZE - C::LENGTH_SIZE;

        self.buffer[self.buffered] = 0x80;
        self.buffered += 1;

        // No room left for the length field, it goes in an extra block
        if self.buffered > length_offset {
            self.buffer[self.buffered..C::BLOCK_SIZE].fill(0);
            C::compress(&mut self.state, &self.buffer[..C::BLOCK_SIZE]);
            self.buffered = 0;
        }
        self.buffer[self.buffered..length_offset].fill(0);

        let length_field = &mut self.buffer[length_offset..C::BLOCK_SIZE];
        match C::ENDIAN {
            Endian::Little => {
                length_field.copy_from_slice(&bit_length.to_le_bytes()[..C::LENGTH_SIZE])
            }
            Endian::Big => {
                length_field.copy_from_slice(&bit_length.to_be_bytes()[16 - C::LENGTH_SIZE..])
            }
        }
        C::compress(&mut self.state, &self.buffer[..C::BLOCK_SIZE]);
        self.buffered = 0;

        let words = self.state.as_ref();
        let mut serialised = [0u8; MAX_STATE_BYTES];
        let state_bytes = words.len() * C::Word::BYTES;
        store_words(words, &mut serialised[..state_bytes], C::ENDIAN);
        out.copy_from_slice(&serialised[..out.len()]);
    }

    pub(crate) fn reset(&mut self) {
        self.state = self.iv;
        self.buffer = [0; MAX_BLOCK_SIZE];
        self.buffered = 0;
        self.message_length = 0;
    }
}
