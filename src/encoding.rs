use thiserror::Error;

/// Trait allowing us to use .encode_hex to render bytes as lowercase hex
pub trait Encodable {
    fn encode_hex(&self) -> String;
}

impl Encodable for [u8] {
    fn encode_hex(&self) -> String {
        to_hex(self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Error)]
pub enum DecodingError {
    #[error("hex string has odd length {0}")]
    OddLength(usize),
    #[error("unrecognised hex character {0:#04x}")]
    InvalidCharacter(u8),
}

/// Trait allowing us to use .decode_hex to decode strings
pub trait Decodable {
    fn decode_hex(&self) -> Result<Vec<u8>, DecodingError>;
}

impl Decodable for str {
    fn decode_hex(&self) -> Result<Vec<u8>, DecodingError> {
        parse_hex(self)
    }
}

/// Parse an input string as hex, accepting either case
/// ```
/// use checksum_core::encoding::parse_hex;
/// assert_eq!(parse_hex("12aB").unwrap(), &[0x12, 0xab]);
/// ```
pub fn parse_hex(input: &str) -> Result<Vec<u8>, DecodingError> {
    let input = input.as_bytes();
    if input.len() % 2 != 0 {
        return Err(DecodingError::OddLength(input.len()));
    }
    input
        .chunks_exact(2)
        .map(|pair| Ok(h2b(pair[0])? << 4 | h2b(pair[1])?))
        .collect()
}

/// Turn a slice of bytes into a lowercase hex encoded string
/// ```
/// use checksum_core::encoding::{Encodable, to_hex};
/// assert_eq!(to_hex([0x12, 0x34, 0x56, 0x78]), "12345678");
/// assert_eq!([0x12_u8, 0x34, 0x56, 0x78][..].encode_hex(), "12345678");
/// ```
pub fn to_hex(input: impl AsRef<[u8]>) -> String {
    let input = input.as_ref();
    let mut out = String::with_capacity(input.len() * 2);
    out.extend(input.iter().copied().flat_map(b2h).map(char::from));
    out
}

/// Convert a hex character to its value
fn h2b(b: u8) -> Result<u8, DecodingError> {
    match b {
        b'0'..=b'9' => Ok(b - b'0'),
        b'A'..=b'F' => Ok(b - b'A' + 10),
        b'a'..=b'f' => Ok(b - b'a' + 10),
        x => Err(DecodingError::InvalidCharacter(x)),
    }
}

/// Convert a byte into the pair of characters representing it in hex
fn b2h(h: u8) -> [u8; 2] {
    #[rustfmt::skip]
    const TABLE: [u8; 16] = [
        b'0', b'1', b'2', b'3',
        b'4', b'5', b'6', b'7',
        b'8', b'9', b'a', b'b',
        b'c', b'd', b'e', b'f',
    ];

    let hi = TABLE[(h >> 4) as usize];
    let lo = TABLE[(h & 0b1111) as usize];
    [hi, lo]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_h2b() {
        for (b, v) in (b'0'..=b'9').zip(0..=9) {
            assert_eq!(h2b(b).unwrap(), v);
        }

        for (b, v) in (b'A'..=b'F').zip(10..=15) {
            assert_eq!(h2b(b).unwrap(), v);
        }

        for (b, v) in (b'a'..=b'f').zip(10..=15) {
            assert_eq!(h2b(b).unwrap(), v);
        }
    }

    #[test]
    fn test_h2b_fails() {
        assert_eq!(h2b(b'G'), Err(DecodingError::InvalidCharacter(b'G')));
        assert!(h2b(b'*').is_err());
        assert!(h2b(b' ').is_err());
    }

    #[test]
    fn test_b2h() {
        for h in u8::MIN..=u8::MAX {
            let s = format!("{h:02x}").into_bytes();
            assert_eq!(b2h(h), [s[0], s[1]]);
        }
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!("6265616e73".decode_hex().unwrap(), b"beans");
        assert_eq!("6265616E73".decode_hex().unwrap(), b"beans");
        assert_eq!("".decode_hex().unwrap(), b"");
    }

    #[test]
    fn test_parse_hex_fails() {
        assert_eq!(parse_hex("6z"), Err(DecodingError::InvalidCharacter(b'z')));
        assert_eq!(parse_hex("abc"), Err(DecodingError::OddLength(3)));
    }

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex([0x62, 0x65, 0x61, 0x6e, 0x73]), "6265616e73");
        assert_eq!(to_hex(b""), "");
        assert_eq!([0x00_u8, 0xff][..].encode_hex(), "00ff");
    }
}
