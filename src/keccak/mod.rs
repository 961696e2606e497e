//! The sponge construction over Keccak-f[1600], giving SHA-3 and SHAKE.

mod permutation;

use permutation::{keccak_f1600, LANES};

use crate::util::{store_words, Endian, Word};

/// Size of the whole permutation state in bytes.
const STATE_BYTES: usize = LANES * 8;

/// Largest rate of any variant (SHAKE128).
pub(crate) const MAX_RATE: usize = 168;

/// Domain separation suffix for the fixed length SHA-3 digests.
pub(crate) const SHA3_SUFFIX: u8 = 0x06;

/// Domain separation suffix for the SHAKE extendable output functions.
pub(crate) const SHAKE_SUFFIX: u8 = 0x1f;

/// Lanes are read and written little-endian.
const LANE_ENDIAN: Endian = Endian::Little;

#[derive(Debug, Clone)]
pub(crate) struct Sponge {
    state: [u64; LANES],
    rate: usize,
    suffix: u8,
    buffer: [u8; MAX_RATE],
    buffered: usize,
    message_length: u128,
}

impl Sponge {
    /// A sponge with `capacity` bits reserved and the given domain suffix.
    pub(crate) fn new(capacity: usize, suffix: u8) -> Self {
        let rate = STATE_BYTES - capacity / 8;
        debug_assert!(rate <= MAX_RATE && rate % 8 == 0);
        Self {
            state: [0; LANES],
            rate,
            suffix,
            buffer: [0; MAX_RATE],
            buffered: 0,
            message_length: 0,
        }
    }

    /// SHA3 with an `output_bits` digest.
    pub(crate) fn sha3(output_bits: usize) -> Self {
        Self::new(2 * output_bits, SHA3_SUFFIX)
    }

    /// SHAKE at the given security level in bits.
    pub(crate) fn shake(security_bits: usize) -> Self {
        Self::new(2 * security_bits, SHAKE_SUFFIX)
    }

    /// Bytes absorbed per permutation.
    pub(crate) fn rate(&self) -> usize {
        self.rate
    }

    pub(crate) fn bytes_processed(&self) -> u128 {
        self.message_length
    }

    fn absorb_block(&mut self, block: &[u8]) {
        for (lane, chunk) in self.state.iter_mut().zip(block.chunks_exact(8)) {
            *lane ^= u64::from_bytes(chunk, LANE_ENDIAN);
        }
        keccak_f1600(&mut self.state);
    }

    pub(crate) fn update(&mut self, mut data: &[u8]) {
        self.message_length = self.message_length.wrapping_add(data.len() as u128);
        let rate = self.rate;

        if self.buffered > 0 {
            let take = (rate - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < rate {
                return;
            }
            let block = self.buffer;
            self.absorb_block(&block[..rate]);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(rate);
        for block in &mut blocks {
            self.absorb_block(block);
        }

        let remaining = blocks.remainder();
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffered = remaining.len();
    }

    /// Apply the suffix and pad10*1, absorb the last block, then squeeze
    /// `out.len()` bytes.
    pub(crate) fn squeeze(&mut self, out: &mut [u8]) {
        let rate = self.rate;
        self.buffer[self.buffered..rate].fill(0);
        self.buffer[self.buffered] ^= self.suffix;
        self.buffer[rate - 1] |= 0x80;
        let block = self.buffer;
        self.absorb_block(&block[..rate]);
        self.buffered = 0;

        let mut lanes = [0u8; STATE_BYTES];
        for (i, chunk) in out.chunks_mut(rate).enumerate() {
            if i > 0 {
                keccak_f1600(&mut self.state);
            }
            store_words(&self.state, &mut lanes, LANE_ENDIAN);
            chunk.copy_from_slice(&lanes[..chunk.len()]);
        }
    }

    pub(crate) fn reset(&mut self) {
        self.state = [0; LANES];
        self.buffer = [0; MAX_RATE];
        self.buffered = 0;
        self.message_length = 0;
    }
}
