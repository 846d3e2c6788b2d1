//! XOR stream cipher over hex text, keyed by an arbitrary string.
//!
//! Plain text is first escaped (control chars, non-ASCII, `%` and `+` are
//! form-url-encoded) so every ciphered unit fits one byte of hex.

use crate::error::EncodingError;
use crate::url;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct XorCipher {
    key: String,
    chars: Vec<char>,
}

impl XorCipher {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let chars = key.chars().collect();
        Self { key, chars }
    }

    pub fn key(&self) -> &str { &self.key }

    #[inline]
    fn key_char(&self, index: usize) -> Result<u32, EncodingError> {
        if self.chars.is_empty() {
            return Err(EncodingError::EmptyKey);
        }
        Ok(self.chars[index % self.chars.len()] as u32)
    }

    /// Encrypt `value` starting at key position `key_offset`. Output is uppercase hex.
    pub fn encrypt(&self, value: &str, key_offset: usize) -> Result<String, EncodingError> {
        let plain = escape(value);
        let mut out = String::with_capacity(plain.len() * 2);
        for (i, c) in plain.chars().enumerate() {
            let e = c as u32 ^ self.key_char(i + key_offset)?;
            out.push_str(&format!("{e:02X}"));
        }
        Ok(out)
    }

    /// Inverse of [`XorCipher::encrypt`]. Hex digits may be in either case.
    pub fn decrypt(&self, value: &str, key_offset: usize) -> Result<String, EncodingError> {
        if value.len() % 2 != 0 {
            return Err(EncodingError::InvalidLength(value.len()));
        }
        let mut decrypted = String::with_capacity(value.len() / 2);
        for (i, pair) in value.as_bytes().chunks(2).enumerate() {
            let c = parse_hex_pair(pair)?;
            let code = c ^ self.key_char(i + key_offset)?;
            decrypted.push(char::from_u32(code).ok_or(EncodingError::InvalidCharCode(code))?);
        }
        url::decode(&decrypted)
    }
}

pub(crate) fn parse_hex_pair(pair: &[u8]) -> Result<u32, EncodingError> {
    let text = std::str::from_utf8(pair).map_err(|_| EncodingError::InvalidHex(String::from_utf8_lossy(pair).into_owned()))?;
    u32::from_str_radix(text, 16).map_err(|_| EncodingError::InvalidHex(text.to_string()))
}

fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if (c as u32) < 32 || (c as u32) > 127 || c == '%' || c == '+' {
            let mut buf = [0u8; 4];
            escaped.push_str(&url::encode(c.encode_utf8(&mut buf)));
        } else {
            escaped.push(c);
        }
    }
    escaped
}
