//! The SHA-2 family as per FIPS 180-4: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf
//!
//! There are only two compression functions here. SHA-224 runs the SHA-256
//! compression and SHA-384, SHA-512/224 and SHA-512/256 run the SHA-512 one;
//! the variants differ in their initial hash value and how much of the final
//! state makes it into the digest.

use super::Compression;
use crate::util::{load_words, Endian};

pub(crate) mod context {
    pub(crate) mod sha224_sha256_shared {
        #[rustfmt::skip]
        pub const K: [u32; 64] = [
            0x428a2f98, 0x71374491, 0xb5c0fbcf, 0xe9b5dba5, 0x3956c25b, 0x59f111f1, 0x923f82a4, 0xab1c5ed5,
            0xd807aa98, 0x12835b01, 0x243185be, 0x550c7dc3, 0x72be5d74, 0x80deb1fe, 0x9bdc06a7, 0xc19bf174,
            0xe49b69c1, 0xefbe4786, 0x0fc19dc6, 0x240ca1cc, 0x2de92c6f, 0x4a7484aa, 0x5cb0a9dc, 0x76f988da,
            0x983e5152, 0xa831c66d, 0xb00327c8, 0xbf597fc7, 0xc6e00bf3, 0xd5a79147, 0x06ca6351, 0x14292967,
            0x27b70a85, 0x2e1b2138, 0x4d2c6dfc, 0x53380d13, 0x650a7354, 0x766a0abb, 0x81c2c92e, 0x92722c85,
            0xa2bfe8a1, 0xa81a664b, 0xc24b8b70, 0xc76c51a3, 0xd192e819, 0xd6990624, 0xf40e3585, 0x106aa070,
            0x19a4c116, 0x1e376c08, 0x2748774c, 0x34b0bcb5, 0x391c0cb3, 0x4ed8aa4a, 0x5b9cca4f, 0x682e6ff3,
            0x748f82ee, 0x78a5636f, 0x84c87814, 0x8cc70208, 0x90befffa, 0xa4506ceb, 0xbef9a3f7, 0xc67178f2,
        ];

        #[allow(non_snake_case)]
        pub const fn Σ_0(x: u32) -> u32 {
            x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
        }

        #[allow(non_snake_case)]
        pub const fn Σ_1(x: u32) -> u32 {
            x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
        }

        pub const fn σ_0(x: u32) -> u32 {
            x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
        }

        pub const fn σ_1(x: u32) -> u32 {
            x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
        }

        pub const ROUNDS: usize = 64;
        pub const STATE_SIZE: usize = 8;
        pub type Word = u32;
    }

    pub(crate) mod sha384_sha512_shared {
        #[rustfmt::skip]
        pub const K: [u64; 80] = [
            0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
            0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
            0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
            0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
            0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
            0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
            0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
            0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
            0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
            0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
            0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
            0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
            0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
            0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
            0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
            0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
            0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
            0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
            0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
            0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
        ];

        #[allow(non_snake_case)]
        pub const fn Σ_0(x: u64) -> u64 {
            x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
        }

        #[allow(non_snake_case)]
        pub const fn Σ_1(x: u64) -> u64 {
            x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
        }

        pub const fn σ_0(x: u64) -> u64 {
            x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
        }

        pub const fn σ_1(x: u64) -> u64 {
            x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
        }

        pub const ROUNDS: usize = 80;
        pub const STATE_SIZE: usize = 8;
        pub type Word = u64;
    }

    pub(crate) mod sha224 {
        use super::sha224_sha256_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0xc1059ed8, 0x367cd507, 0x3070dd17, 0xf70e5939,
            0xffc00b31, 0x68581511, 0x64f98fa7, 0xbefa4fa4,
        ];
    }

    pub(crate) mod sha256 {
        use super::sha224_sha256_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0x6a09e667, 0xbb67ae85, 0x3c6ef372, 0xa54ff53a,
            0x510e527f, 0x9b05688c, 0x1f83d9ab, 0x5be0cd19,
        ];
    }

    pub(crate) mod sha384 {
        use super::sha384_sha512_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0xcbbb9d5dc1059ed8, 0x629a292a367cd507, 0x9159015a3070dd17, 0x152fecd8f70e5939,
            0x67332667ffc00b31, 0x8eb44a8768581511, 0xdb0c2e0d64f98fa7, 0x47b5481dbefa4fa4,
        ];
    }

    pub(crate) mod sha512 {
        use super::sha384_sha512_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
            0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
        ];
    }

    /// Generated by the SHA-512/t IV generation function with t = 224.
    pub(crate) mod sha512_224 {
        use super::sha384_sha512_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0x8c3d37c819544da2, 0x73e1996689dcd4d6, 0x1dfab7ae32ff9c82, 0x679dd514582f9fcf,
            0x0f6d2b697bd44da8, 0x77e36f7304c48942, 0x3f9d85a86a1d36c8, 0x1112e6ad91d692a1,
        ];
    }

    /// Generated by the SHA-512/t IV generation function with t = 256.
    pub(crate) mod sha512_256 {
        use super::sha384_sha512_shared::{Word, STATE_SIZE};

        pub const INIT_STATE: [Word; STATE_SIZE] = [
            0x22312194fc2bf72c, 0x9f555fa3c84c64c2, 0x2393b86b6f53b151, 0x963877195940eabd,
            0x96283ee2a88effe3, 0xbe5e1e2553863992, 0x2b0199fc2c85b8aa, 0x0eb72ddc81c52ca2,
        ];
    }
}

macro_rules! sha2_compression {
    (name = $name:ident, shared = $shared:ident, block_size = $block:literal, length_size = $length:literal $(,)?) => {
        #[derive(Debug, Clone)]
        pub(crate) struct $name;

        impl Compression for $name {
            type Word = context::$shared::Word;
            type State = [context::$shared::Word; context::$shared::STATE_SIZE];

            const BLOCK_SIZE: usize = $block;
            const LENGTH_SIZE: usize = $length;
            const ENDIAN: Endian = Endian::Big;

            #[allow(non_snake_case)]
            fn compress(state: &mut Self::State, block: &[u8]) {
                use context::$shared::*;

                // The message schedule
                let mut W: [Word; ROUNDS] = [0; ROUNDS];
                let head: [Word; 16] = load_words(block, Self::ENDIAN);
                W[..16].copy_from_slice(&head);

                // Expand the message into the rest of the schedule
                for t in 16..ROUNDS {
                    W[t] = σ_1(W[t - 2])
                        .wrapping_add(W[t - 7])
                        .wrapping_add(σ_0(W[t - 15]))
                        .wrapping_add(W[t - 16]);
                }

                // Working variables
                let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

                for t in 0..ROUNDS {
                    let T1 = h
                        .wrapping_add(Σ_1(e))
                        .wrapping_add(Ch!(e, f, g))
                        .wrapping_add(K[t])
                        .wrapping_add(W[t]);
                    let T2 = Σ_0(a).wrapping_add(Maj!(a, b, c));
                    h = g;
                    g = f;
                    f = e;
                    e = d.wrapping_add(T1);
                    d = c;
                    c = b;
                    b = a;
                    a = T1.wrapping_add(T2);
                }

                // Compute the intermediate hash values
                for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
                    *s = s.wrapping_add(v);
                }
            }
        }
    };
}

sha2_compression! {
    name        = Sha256,
    shared      = sha224_sha256_shared,
    block_size  = 64,
    length_size = 8,
}

sha2_compression! {
    name        = Sha512,
    shared      = sha384_sha512_shared,
    block_size  = 128,
    length_size = 16,
}
