use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("invalid pseudo-base64 character {0:?}")]
    InvalidChar(char),
    #[error("value {0} does not fit a pseudo-base64 digit")]
    InvalidValue(u32),
    #[error("invalid length {0}")]
    InvalidLength(usize),
    #[error("invalid hexadecimal input {0:?}")]
    InvalidHex(String),
    #[error("decoded code point {0:#x} is not a valid char")]
    InvalidCharCode(u32),
    #[error("url-decoded bytes are not valid utf-8")]
    InvalidUtf8,
    #[error("input of {len} chars is too long for a key of {key_len} chars")]
    TooLongForKey { len: usize, key_len: usize },
    #[error("key is empty")]
    EmptyKey,
}
