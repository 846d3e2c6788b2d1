//! 4-bit additive checksum used to derive cipher offsets and validate packets.

use crate::error::EncodingError;

/// Sum of every char code modulo 16, reduced modulo 16.
pub fn integer(value: &str) -> u8 {
    let sum: u32 = value.chars().map(|c| c as u32 % 16).sum();
    (sum % 16) as u8
}

/// Checksum as one uppercase hex digit.
pub fn hexadecimal(value: &str) -> String {
    format!("{:X}", integer(value))
}

pub fn verify(input: &str, expected: u8) -> bool {
    integer(input) == expected
}

/// Compare against a hex digit, case-insensitive.
pub fn verify_hex(input: &str, expected: &str) -> Result<bool, EncodingError> {
    let expected = u8::from_str_radix(expected, 16).map_err(|_| EncodingError::InvalidHex(expected.to_string()))?;
    Ok(verify(input, expected))
}
