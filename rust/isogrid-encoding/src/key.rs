//! Session key for map payload encryption, and its hex exchange format.

use std::fmt;

use rand::Rng;

use crate::error::EncodingError;
use crate::url;
use crate::xor_cipher::{parse_hex_pair, XorCipher};

pub const DEFAULT_KEY_SIZE: usize = 128;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Key {
    cipher: XorCipher,
}

impl Key {
    pub fn new(key: impl Into<String>) -> Self { Self { cipher: XorCipher::new(key) } }

    pub fn as_str(&self) -> &str { self.cipher.key() }

    pub fn cipher(&self) -> &XorCipher { &self.cipher }

    /// Form-url-encode the key, then write every char as two lowercase hex digits.
    pub fn encode(&self) -> String {
        url::encode(self.as_str()).bytes().map(|b| format!("{b:02x}")).collect()
    }

    /// Inverse of [`Key::encode`].
    pub fn parse(input: &str) -> Result<Self, EncodingError> {
        if input.len() % 2 != 0 {
            return Err(EncodingError::InvalidLength(input.len()));
        }
        let mut raw = String::with_capacity(input.len() / 2);
        for pair in input.as_bytes().chunks(2) {
            let code = parse_hex_pair(pair)?;
            raw.push(char::from_u32(code).ok_or(EncodingError::InvalidCharCode(code))?);
        }
        Ok(Self::new(url::decode(&raw)?))
    }

    /// Random key of `size` printable ASCII chars (32..127).
    pub fn generate<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let key: String = (0..size).map(|_| rng.gen_range(32u8..127) as char).collect();
        Self::new(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
