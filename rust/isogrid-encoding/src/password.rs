//! Login password scrambling: every password char becomes two alphabet
//! chars shifted by the matching key char.

use crate::base64;
use crate::error::EncodingError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordEncoder {
    key: String,
    chars: Vec<char>,
}

impl PasswordEncoder {
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        let chars = key.chars().collect();
        Self { key, chars }
    }

    pub fn key(&self) -> &str { &self.key }

    pub fn encode(&self, password: &str) -> Result<String, EncodingError> {
        let len = password.chars().count();
        if len > self.chars.len() {
            return Err(EncodingError::TooLongForKey { len, key_len: self.chars.len() });
        }
        let mut out = String::with_capacity(len * 2);
        for (c, k) in password.chars().zip(&self.chars) {
            let (c, k) = (c as u32, *k as u32);
            out.push(base64::chr_mod(c / 16 + k));
            out.push(base64::chr_mod(c % 16 + k));
        }
        Ok(out)
    }

    pub fn decode(&self, encoded: &str) -> Result<String, EncodingError> {
        let digits = base64::to_bytes(encoded)?;
        if digits.len() % 2 != 0 {
            return Err(EncodingError::InvalidLength(digits.len()));
        }
        if self.chars.len() * 2 < digits.len() {
            return Err(EncodingError::TooLongForKey { len: digits.len() / 2, key_len: self.chars.len() });
        }
        digits
            .chunks(2)
            .zip(&self.chars)
            .map(|(pair, k)| {
                let k = *k as u32 % 64;
                let d = (pair[0] as u32 + 64 - k) % 64;
                let r = (pair[1] as u32 + 64 - k) % 64;
                let code = d * 16 + r;
                char::from_u32(code).ok_or(EncodingError::InvalidCharCode(code))
            })
            .collect()
    }
}
