//! Text codecs shared by the isogrid wire formats.
//!
//! Everything here is a pure function of its inputs: the pseudo-Base64
//! alphabet used by map and path strings, the 4-bit checksum, the XOR
//! stream cipher protecting map payloads and its key exchange format.

pub mod base64;
pub mod checksum;
pub mod error;
pub mod key;
pub mod password;
pub mod url;
pub mod xor_cipher;

pub use error::EncodingError;
pub use key::Key;
pub use password::PasswordEncoder;
pub use xor_cipher::XorCipher;
