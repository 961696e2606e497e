//! MD4 as per RFC 1320: https://www.rfc-editor.org/rfc/rfc1320

use super::Compression;
use crate::util::{load_words, Endian};

pub(crate) mod context {
    pub const WORD_A: u32 = u32::from_le_bytes([0x01, 0x23, 0x45, 0x67]);
    pub const WORD_B: u32 = u32::from_le_bytes([0x89, 0xab, 0xcd, 0xef]);
    pub const WORD_C: u32 = u32::from_le_bytes([0xfe, 0xdc, 0xba, 0x98]);
    pub const WORD_D: u32 = u32::from_le_bytes([0x76, 0x54, 0x32, 0x10]);

    pub const INIT_STATE: [u32; 4] = [WORD_A, WORD_B, WORD_C, WORD_D];
}

#[derive(Debug, Clone)]
pub(crate) struct Md4;

impl Compression for Md4 {
    type Word = u32;
    type State = [u32; 4];

    const BLOCK_SIZE: usize = 64;
    const LENGTH_SIZE: usize = 8;
    const ENDIAN: Endian = Endian::Little;

    #[allow(non_snake_case)]
    #[rustfmt::skip]
    fn compress(state: &mut [u32; 4], block: &[u8]) {
        let X: [u32; 16] = load_words(block, Self::ENDIAN);

        let [mut a, mut b, mut c, mut d] = *state;

        /* Round 1. */
        /* Let [abcd k s] denote the operation
        a = (a + F(b,c,d) + X[k]) <<< s. */
        macro_rules! r1 {
            ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
                $a = $a.wrapping_add(Ch!($b, $c, $d)).wrapping_add(X[$k]).rotate_left($s);
            };
        }

        r1!(a b c d  0  3); r1!(d a b c  1  7); r1!(c d a b  2 11); r1!(b c d a  3 19);
        r1!(a b c d  4  3); r1!(d a b c  5  7); r1!(c d a b  6 11); r1!(b c d a  7 19);
        r1!(a b c d  8  3); r1!(d a b c  9  7); r1!(c d a b 10 11); r1!(b c d a 11 19);
        r1!(a b c d 12  3); r1!(d a b c 13  7); r1!(c d a b 14 11); r1!(b c d a 15 19);

        /* Round 2. */
        /* Let [abcd k s] denote the operation
        a = (a + G(b,c,d) + X[k] + 5A827999) <<< s. */
        macro_rules! r2 {
            ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
                $a = $a
                    .wrapping_add(Maj!($b, $c, $d))
                    .wrapping_add(X[$k])
                    .wrapping_add(0x5A827999)
                    .rotate_left($s);
            };
        }

        r2!(a b c d  0  3); r2!(d a b c  4  5); r2!(c d a b  8  9); r2!(b c d a 12 13);
        r2!(a b c d  1  3); r2!(d a b c  5  5); r2!(c d a b  9  9); r2!(b c d a 13 13);
        r2!(a b c d  2  3); r2!(d a b c  6  5); r2!(c d a b 10  9); r2!(b c d a 14 13);
        r2!(a b c d  3  3); r2!(d a b c  7  5); r2!(c d a b 11  9); r2!(b c d a 15 13);

        /* Round 3. */
        /* Let [abcd k s] denote the operation
        a = (a + H(b,c,d) + X[k] + 6ED9EBA1) <<< s. */
        macro_rules! r3 {
            ($a:ident $b:ident $c:ident $d:ident $k:literal $s:literal) => {
                $a = $a
                    .wrapping_add(Parity!($b, $c, $d))
                    .wrapping_add(X[$k])
                    .wrapping_add(0x6ED9EBA1)
                    .rotate_left($s);
            };
        }

        r3!(a b c d  0  3); r3!(d a b c  8  9); r3!(c d a b  4 11); r3!(b c d a 12 15);
        r3!(a b c d  2  3); r3!(d a b c 10  9); r3!(c d a b  6 11); r3!(b c d a 14 15);
        r3!(a b c d  1  3); r3!(d a b c  9  9); r3!(c d a b  5 11); r3!(b c d a 13 15);
        r3!(a b c d  3  3); r3!(d a b c 11  9); r3!(c d a b  7 11); r3!(b c d a 15 15);

        /* Then perform the following additions. (That is, increment each
        of the four registers by the value it had before this block
        was started.) */
        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::Encodable;
    use crate::md::MdCore;

    fn md4(data: &str) -> String {
        let mut hasher = MdCore::<Md4>::new(context::INIT_STATE);
        hasher.update(data.as_bytes());
        let mut digest = [0; 16];
        hasher.finalize_into(&mut digest);
        digest.encode_hex()
    }

    // test vectors from https://www.rfc-editor.org/rfc/rfc1320
    #[test]
    fn test_md4_rfc_vectors() {
        let test_vectors = [
            ("", "31d6cfe0d16ae931b73c59d7e0c089c0"),
            ("a", "bde52cb31de33e46245e05fbdbd6fb24"),
            ("abc", "a448017aaf21d8525fc10ae87aa6729d"),
            ("message digest", "d9130a8164549fe818874806e1c7014b"),
            (
                "abcdefghijklmnopqrstuvwxyz",
                "d79e1c308aa5bbcdeea8ed63df412da9",
            ),
            (
                "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789",
                "043f8582f241db351ce627e153e7f0e4",
            ),
            (
                "12345678901234567890123456789012345678901234567890123456789012345678901234567890",
                "e33b4ddc9c38f2199c3e7b164fcc0536",
            ),
        ];
        for (test, correct) in test_vectors {
            assert_eq!(md4(test), correct);
        }
    }

    #[test]
    fn test_md4_block_boundary() {
        assert_eq!(md4(&"a".repeat(64)), "52f5076fabd22680234a3fa9f9dc5732");
    }

    #[test]
    fn test_md4_output_is_le() {
        let mut state = context::INIT_STATE;
        // the IV serialises to the byte listing given in the RFC
        let mut out = [0u8; 16];
        crate::util::store_words(&state, &mut out, Md4::ENDIAN);
        assert_eq!(out.encode_hex(), "0123456789abcdeffedcba9876543210");

        Md4::compress(&mut state, &[0; 64]);
        assert_ne!(state, context::INIT_STATE);
    }
}
