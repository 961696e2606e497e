use std::slice;

/// Byte order used when assembling words from a block, or a block from words.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Endian {
    Little,
    Big,
}

/// A fixed width machine word that the compression functions operate on.
///
/// Every conversion between bytes and words goes through this trait with the
/// byte order spelled out at the call site.
pub trait Word: Copy + Default + Eq + std::fmt::Debug {
    /// Width of the word in bytes.
    const BYTES: usize;

    /// Assemble a word from exactly [`Self::BYTES`] bytes.
    fn from_bytes(bytes: &[u8], endian: Endian) -> Self;

    /// Write the word into exactly [`Self::BYTES`] bytes.
    fn write_bytes(self, out: &mut [u8], endian: Endian);
}

macro_rules! impl_word {
    ($($ty:ty),+) => {
        $(
            impl Word for $ty {
                const BYTES: usize = std::mem::size_of::<$ty>();

                #[inline(always)]
                fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
                    let bytes: &[u8; std::mem::size_of::<$ty>()] = cast_as_array(bytes);
                    match endian {
                        Endian::Little => <$ty>::from_le_bytes(*bytes),
                        Endian::Big => <$ty>::from_be_bytes(*bytes),
                    }
                }

                #[inline(always)]
                fn write_bytes(self, out: &mut [u8], endian: Endian) {
                    let bytes = match endian {
                        Endian::Little => self.to_le_bytes(),
                        Endian::Big => self.to_be_bytes(),
                    };
                    out.copy_from_slice(&bytes);
                }
            }
        )+
    };
}

impl_word!(u32, u64);

/// Split `bytes` into `N` words using the given byte order.
///
/// `bytes` must hold exactly `N` words.
pub fn load_words<W: Word, const N: usize>(bytes: &[u8], endian: Endian) -> [W; N] {
    assert_eq!(bytes.len(), N * W::BYTES, "Block length does not match word count.");
    let mut words = [W::default(); N];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks_exact(W::BYTES)) {
        *word = W::from_bytes(chunk, endian);
    }
    words
}

/// Serialise `words` into `out` using the given byte order.
///
/// `out` must be exactly as long as the words it receives.
pub fn store_words<W: Word>(words: &[W], out: &mut [u8], endian: Endian) {
    assert_eq!(out.len(), words.len() * W::BYTES, "Output length does not match word count.");
    for (word, chunk) in words.iter().zip(out.chunks_exact_mut(W::BYTES)) {
        word.write_bytes(chunk, endian);
    }
}

/// \[T\]::as_chunks isn't available on every toolchain we build with, so here's our own
pub fn as_chunks<T, const N: usize>(slice: &[T]) -> (&[[T; N]], &[T]) {
    // SAFETY: len * N is always less than or equal to slice.len()
    // len * N is also always guaranteed to be divisible by N
    // thus it is safe to create `len` arrays of length N from that slice
    let len = slice.len() / N;
    let (array_slice, remainder) = slice.split_at(len * N);
    let arrays = unsafe { slice::from_raw_parts(array_slice.as_ptr().cast(), len) };

    (arrays, remainder)
}

/// Cast a slice to an array, panics if the slice is not exactly N long
#[rustfmt::skip]
pub fn cast_as_array<T, const N: usize>(slice: &[T]) -> &[T; N] {
    slice.try_into().expect("Failed to cast as array.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_chunks() {
        let input: Vec<u32> = (0..10).collect();
        let (arrays, rest): (&[[u32; 4]], _) = as_chunks(&input[..]);
        assert_eq!(arrays, [[0, 1, 2, 3], [4, 5, 6, 7]]);
        assert_eq!(rest, [8, 9]);
    }

    #[test]
    fn test_as_chunks_short_input() {
        let input = [1u8, 2, 3];
        let (arrays, rest): (&[[u8; 4]], _) = as_chunks(&input[..]);
        assert!(arrays.is_empty());
        assert_eq!(rest, [1, 2, 3]);
    }

    #[test]
    fn test_cast_as_array() {
        let input: Vec<u8> = (0..16).collect();
        let arrays: &[u8; 16] = cast_as_array(&input[..]);
        assert_eq!(
            *arrays,
            [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15]
        );
    }

    #[test]
    #[should_panic]
    fn test_cast_as_array_wrong_length_fails() {
        let input: Vec<u8> = (0..15).collect();
        let _arrays: &[u8; 16] = cast_as_array(&input[..]);
    }

    #[test]
    fn test_word_endianness() {
        let bytes = [0x01, 0x23, 0x45, 0x67];
        assert_eq!(u32::from_bytes(&bytes, Endian::Little), 0x67452301);
        assert_eq!(u32::from_bytes(&bytes, Endian::Big), 0x01234567);

        let mut out = [0u8; 8];
        0x0123456789abcdef_u64.write_bytes(&mut out, Endian::Little);
        assert_eq!(out, [0xef, 0xcd, 0xab, 0x89, 0x67, 0x45, 0x23, 0x01]);
        0x0123456789abcdef_u64.write_bytes(&mut out, Endian::Big);
        assert_eq!(out, [0x01, 0x23, 0x45, 0x67, 0x89, 0xab, 0xcd, 0xef]);
    }

    #[test]
    fn test_load_store_words() {
        let bytes: Vec<u8> = (0..16).collect();
        let words: [u32; 4] = load_words(&bytes, Endian::Big);
        assert_eq!(words, [0x00010203, 0x04050607, 0x08090a0b, 0x0c0d0e0f]);

        let mut out = [0u8; 16];
        store_words(&words, &mut out, Endian::Big);
        assert_eq!(&out[..], &bytes[..]);

        store_words(&words, &mut out, Endian::Little);
        assert_eq!(&out[..4], [0x03, 0x02, 0x01, 0x00]);
    }
}
