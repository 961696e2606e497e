//! SHA-1 as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf

use super::Compression;
use crate::util::{load_words, Endian};

pub(crate) mod context {
    const H0: u32 = 0x67452301;
    const H1: u32 = 0xEFCDAB89;
    const H2: u32 = 0x98BADCFE;
    const H3: u32 = 0x10325476;
    const H4: u32 = 0xC3D2E1F0;

    pub const INIT_STATE: [Word; STATE_SIZE] = [H0, H1, H2, H3, H4];

    pub const STATE_SIZE: usize = 5;
    pub const ROUNDS: usize = 80;

    pub const K: [u32; 4] = [0x5A827999, 0x6ED9EBA1, 0x8F1BBCDC, 0xCA62C1D6];

    pub type Word = u32;
}

#[derive(Debug, Clone)]
pub(crate) struct Sha1;

impl Compression for Sha1 {
    type Word = u32;
    type State = [u32; context::STATE_SIZE];

    const BLOCK_SIZE: usize = 64;
    const LENGTH_SIZE: usize = 8;
    const ENDIAN: Endian = Endian::Big;

    #[allow(non_snake_case)]
    fn compress(state: &mut Self::State, block: &[u8]) {
        use context::*;

        // The message schedule
        let mut W: [Word; ROUNDS] = [0; ROUNDS];
        let head: [Word; 16] = load_words(block, Self::ENDIAN);
        W[..16].copy_from_slice(&head);

        // Expand the message into the rest of the schedule
        for t in 16..ROUNDS {
            W[t] = (W[t - 3] ^ W[t - 8] ^ W[t - 14] ^ W[t - 16]).rotate_left(1);
        }

        // Working variables
        let [mut a, mut b, mut c, mut d, mut e] = *state;

        for (t, &w) in W.iter().enumerate() {
            let f = match t {
                0..=19 => Ch!(b, c, d),
                40..=59 => Maj!(b, c, d),
                _ => Parity!(b, c, d),
            };
            let T = a
                .rotate_left(5)
                .wrapping_add(f)
                .wrapping_add(e)
                .wrapping_add(K[t / 20])
                .wrapping_add(w);
            e = d;
            d = c;
            c = b.rotate_left(30);
            b = a;
            a = T;
        }

        // Compute the intermediate hash values
        state[0] = state[0].wrapping_add(a);
        state[1] = state[1].wrapping_add(b);
        state[2] = state[2].wrapping_add(c);
        state[3] = state[3].wrapping_add(d);
        state[4] = state[4].wrapping_add(e);
    }
}
