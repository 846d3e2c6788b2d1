//! Pseudo-Base64: a 64 symbol alphabet (`a-z A-Z 0-9 - _`) mapping each
//! character to a 6-bit value. Not RFC 4648 Base64; there is no padding
//! and no byte grouping.

use crate::error::EncodingError;

pub const CHARSET: [char; 64] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v',
    'w', 'x', 'y', 'z', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', '-', '_',
];

/// Widest value `encode`/`decode` accept, in characters (36 bits).
pub const MAX_ENCODED_LEN: usize = 6;

/// 6-bit value of one alphabet character.
#[inline]
pub fn ord(c: char) -> Result<u8, EncodingError> {
    match c {
        'a'..='z' => Ok(c as u8 - b'a'),
        'A'..='Z' => Ok(c as u8 - b'A' + 26),
        '0'..='9' => Ok(c as u8 - b'0' + 52),
        '-' => Ok(62),
        '_' => Ok(63),
        _ => Err(EncodingError::InvalidChar(c)),
    }
}

/// Character for a value in `[0, 64)`.
#[inline]
pub fn chr(value: u32) -> Result<char, EncodingError> {
    CHARSET.get(value as usize).copied().ok_or(EncodingError::InvalidValue(value))
}

/// Character for `value % 64`.
#[inline]
pub fn chr_mod(value: u32) -> char {
    CHARSET[(value % 64) as usize]
}

/// Encode `value` on exactly `length` characters, most significant digit first.
/// Bits above `6 * length` are dropped.
pub fn encode(value: u64, length: usize) -> Result<String, EncodingError> {
    if !(1..=MAX_ENCODED_LEN).contains(&length) {
        return Err(EncodingError::InvalidLength(length));
    }
    let mut out = vec!['a'; length];
    let mut v = value;
    for slot in out.iter_mut().rev() {
        *slot = CHARSET[(v & 63) as usize];
        v >>= 6;
    }
    Ok(out.into_iter().collect())
}

/// Encode a slice of 6-bit values, one character each.
pub fn encode_bytes(data: &[u8]) -> Result<String, EncodingError> {
    data.iter().map(|&b| chr(b as u32)).collect()
}

/// Decode a big-endian value of at most six characters.
pub fn decode(encoded: &str) -> Result<u64, EncodingError> {
    let len = encoded.chars().count();
    if len > MAX_ENCODED_LEN {
        return Err(EncodingError::InvalidLength(len));
    }
    encoded.chars().try_fold(0u64, |acc, c| Ok((acc << 6) | ord(c)? as u64))
}

/// 6-bit value of every character of `encoded`.
pub fn to_bytes(encoded: &str) -> Result<Vec<u8>, EncodingError> {
    encoded.chars().map(ord).collect()
}
