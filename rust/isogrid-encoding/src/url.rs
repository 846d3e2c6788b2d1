//! `application/x-www-form-urlencoded` escaping, as spoken by the game
//! client: space becomes `+`, unreserved characters are `A-Z a-z 0-9 . - * _`,
//! everything else is percent-encoded UTF-8 with uppercase hex digits.

use crate::error::EncodingError;

#[inline]
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'*' | b'_')
}

pub fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for &b in value.as_bytes() {
        if is_unreserved(b) {
            out.push(b as char);
        } else if b == b' ' {
            out.push('+');
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    out
}

pub fn decode(value: &str) -> Result<String, EncodingError> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' => {
                let hex = value.get(i + 1..i + 3).ok_or_else(|| EncodingError::InvalidHex(value[i..].to_string()))?;
                let b = u8::from_str_radix(hex, 16).map_err(|_| EncodingError::InvalidHex(hex.to_string()))?;
                out.push(b);
                i += 3;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8(out).map_err(|_| EncodingError::InvalidUtf8)
}
