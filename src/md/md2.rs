//! MD2 as per RFC 1319: https://www.rfc-editor.org/rfc/rfc1319
//!
//! Checksum chaining follows the RFC errata: the running byte `L` carries
//! over from one block to the next instead of restarting at zero.

use crate::util::as_chunks;

pub(crate) mod context {
    pub const BLOCK_SIZE: usize = 16;
    pub const DIGEST_SIZE: usize = 16;
    pub const ROUNDS: usize = 18;

    /// Permutation of 0..=255 constructed from the digits of pi.
    #[rustfmt::skip]
    pub const PI_SUBST: [u8; 256] = [
        41, 46, 67, 201, 162, 216, 124, 1, 61, 54, 84, 161, 236, 240, 6,
        19, 98, 167, 5, 243, 192, 199, 115, 140, 152, 147, 43, 217, 188,
        76, 130, 202, 30, 155, 87, 60, 253, 212, 224, 22, 103, 66, 111, 24,
        138, 23, 229, 18, 190, 78, 196, 214, 218, 158, 222, 73, 160, 251,
        245, 142, 187, 47, 238, 122, 169, 104, 121, 145, 21, 178, 7, 63,
        148, 194, 16, 137, 11, 34, 95, 33, 128, 127, 93, 154, 90, 144, 50,
        39, 53, 62, 204, 231, 191, 247, 151, 3, 255, 25, 48, 179, 72, 165,
        181, 209, 215, 94, 146, 42, 172, 86, 170, 198, 79, 184, 56, 210,
        150, 164, 125, 182, 118, 252, 107, 226, 156, 116, 4, 241, 69, 157,
        112, 89, 100, 113, 135, 32, 134, 91, 207, 101, 230, 45, 168, 2, 27,
        96, 37, 173, 174, 176, 185, 246, 28, 70, 97, 105, 52, 64, 126, 15,
        85, 71, 163, 35, 221, 81, 175, 58, 195, 92, 249, 206, 186, 197,
        234, 38, 44, 83, 13, 110, 133, 40, 132, 9, 211, 223, 205, 244, 65,
        129, 77, 82, 106, 220, 55, 200, 108, 193, 171, 250, 36, 225, 123,
        8, 12, 189, 177, 74, 120, 136, 149, 139, 227, 99, 232, 109, 233,
        203, 213, 254, 59, 0, 29, 57, 242, 239, 183, 14, 102, 88, 208, 228,
        166, 119, 114, 248, 235, 117, 75, 10, 49, 68, 80, 180, 143, 237,
        31, 26, 219, 153, 141, 51, 159, 17, 131, 20,
    ];
}

use context::*;

#[derive(Debug, Clone)]
pub(crate) struct Md2 {
    /// The 48 byte working buffer X; its first 16 bytes are the digest.
    state: [u8; 48],
    checksum: [u8; BLOCK_SIZE],
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,
    message_length: u128,
}

impl Md2 {
    pub(crate) fn new() -> Self {
        Self {
            state: [0; 48],
            checksum: [0; BLOCK_SIZE],
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            message_length: 0,
        }
    }

    pub(crate) fn bytes_processed(&self) -> u128 {
        self.message_length
    }

    fn process_block(&mut self, block: &[u8; BLOCK_SIZE]) {
        let x = &mut self.state;

        for j in 0..BLOCK_SIZE {
            x[BLOCK_SIZE + j] = block[j];
            x[2 * BLOCK_SIZE + j] = block[j] ^ x[j];
        }

        let mut t: u8 = 0;
        for round in 0..ROUNDS {
            for byte in x.iter_mut() {
                *byte ^= PI_SUBST[t as usize];
                t = *byte;
            }
            t = t.wrapping_add(round as u8);
        }

        let mut l = self.checksum[BLOCK_SIZE - 1];
        for (c, &b) in self.checksum.iter_mut().zip(block) {
            *c ^= PI_SUBST[(b ^ l) as usize];
            l = *c;
        }
    }

    pub(crate) fn update(&mut self, mut data: &[u8]) {
        self.message_length = self.message_length.wrapping_add(data.len() as u128);

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return;
            }
            let block = self.buffer;
            self.process_block(&block);
            self.buffered = 0;
        }

        let (blocks, remaining) = as_chunks::<u8, BLOCK_SIZE>(data);
        for block in blocks {
            self.process_block(block);
        }
        self.buffer[..remaining.len()].copy_from_slice(remaining);
        self.buffered = remaining.len();
    }

    /// Pad, fold in the checksum and write the leading `out.len()` digest
    /// bytes into `out`.
    pub(crate) fn finalize_into(&mut self, out: &mut [u8]) {
        // PKCS#7 style: always between 1 and 16 bytes, each equal to the count
        let pad = (BLOCK_SIZE - self.buffered) as u8;
        self.buffer[self.buffered..].fill(pad);
        let block = self.buffer;
        self.process_block(&block);
        self.buffered = 0;

        let checksum = self.checksum;
        self.process_block(&checksum);

        debug_assert!(out.len() <= DIGEST_SIZE);
        out.copy_from_slice(&self.state[..out.len()]);
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Md2 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encodable;

    fn md2(data: &[u8]) -> String {
        let mut hasher = Md2::new();
        hasher.update(data);
        let mut digest = [0; DIGEST_SIZE];
        hasher.finalize_into(&mut digest);
        digest.encode_hex()
    }

    #[test]
    fn test_pi_subst_is_a_permutation() {
        let mut seen = [false; 256];
        for &s in PI_SUBST.iter() {
            assert!(!seen[s as usize], "{s} appears twice");
            seen[s as usize] = true;
        }
    }

    // test vectors from https://www.rfc-editor.org/rfc/rfc1319
    #[test]
    fn test_md2_rfc_vectors() {
        let test_vectors = [
            ("", "8350e5a3e24c153df2275c9f80692773"),
            ("a", "32ec01ec4a6dac72c0ab96fb34c0b5d1"),
            ("abc", "da853b0d3f88d99b30283a69e6ded6bb"),
            ("message digest", "ab4f496bfb2a530b219ff33031fe06b0"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "4e8ddff3650292ab5a4108c3aa47940b",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "d5976f79d83d3a0dc9806c3c66f3efd8",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(md2(test.as_bytes()), correct);
        }
    }

    #[test]
    fn test_md2_block_multiples() {
        // A full block of padding is added, and the checksum chains across blocks
        assert_eq!(md2(&[b'a'; 16]), "b437ae50feb09a37c16b4c605cd642da");
        assert_eq!(md2(&[b'a'; 32]), "fc6f34c6b52617387390d85ea9e510be");
        assert_eq!(md2(&[b'a'; 64]), "14db72af1a6b6290199f6be37fd78339");
    }

    #[test]
    fn test_md2_split_updates() {
        let mut hasher = Md2::new();
        for chunk in b"message digest".chunks(3) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.bytes_processed(), 14);
        let mut digest = [0; DIGEST_SIZE];
        hasher.finalize_into(&mut digest);
        assert_eq!(digest.encode_hex(), "ab4f496bfb2a530b219ff33031fe06b0");

        hasher.reset();
        assert_eq!(hasher.bytes_processed(), 0);
        assert_eq!(md2(b""), {
            let mut digest = [0; DIGEST_SIZE];
            hasher.finalize_into(&mut digest);
            digest.encode_hex()
        });
    }
}
