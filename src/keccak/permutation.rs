//! Keccak-f[1600] as per FIPS 202: https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.202.pdf
//!
//! Lanes are indexed `x + 5 * y`.

pub(crate) const LANES: usize = 25;
pub(crate) const ROUNDS: usize = 24;

/// Rotation offset of each lane for the rho step.
#[rustfmt::skip]
const RHO: [u32; LANES] = [
     0,  1, 62, 28, 27,
    36, 44,  6, 55, 20,
     3, 10, 43, 25, 39,
    41, 45, 15, 21,  8,
    18,  2, 61, 56, 14,
];

/// Source lane of each destination lane for the pi step, from
/// `(x, y) -> (y, 2x + 3y)`.
#[rustfmt::skip]
const PI: [usize; LANES] = [
     0,  6, 12, 18, 24,
     3,  9, 10, 16, 22,
     1,  7, 13, 19, 20,
     4,  5, 11, 17, 23,
     2,  8, 14, 15, 21,
];

#[rustfmt::skip]
const RC: [u64; ROUNDS] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

pub(crate) fn keccak_f1600(a: &mut [u64; LANES]) {
    for rc in RC {
        // theta
        let mut c = [0u64; 5];
        for (x, parity) in c.iter_mut().enumerate() {
            *parity = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // rho and pi
        let mut b = [0u64; LANES];
        for (i, lane) in b.iter_mut().enumerate() {
            *lane = a[PI[i]].rotate_left(RHO[PI[i]]);
        }

        // chi
        for y in 0..5 {
            for x in 0..5 {
                a[x + 5 * y] = b[x + 5 * y] ^ (!b[(x + 1) % 5 + 5 * y] & b[(x + 2) % 5 + 5 * y]);
            }
        }

        // iota
        a[0] ^= rc;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pi_is_a_permutation() {
        let mut seen = [false; LANES];
        for &src in PI.iter() {
            assert!(!seen[src]);
            seen[src] = true;
        }
    }

    #[test]
    fn test_pi_matches_lane_mapping() {
        // destination (y, 2x + 3y) takes the lane at (x, y)
        for x in 0..5 {
            for y in 0..5 {
                let dst = y + 5 * ((2 * x + 3 * y) % 5);
                assert_eq!(PI[dst], x + 5 * y);
            }
        }
    }

    // Keccak team's KeccakF-1600 intermediate values, state after one
    // permutation of the all zero state
    #[test]
    fn test_permutation_of_zero_state() {
        let mut state = [0u64; LANES];
        keccak_f1600(&mut state);
        assert_eq!(state[0], 0xf1258f7940e1dde7);
        assert_eq!(state[1], 0x84d5ccf933c0478a);
        assert_eq!(state[24], 0xeaf1ff7b5ceca249);
    }
}
