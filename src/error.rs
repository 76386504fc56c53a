//! Error types for the XXTEA library.

use std::fmt;

/// Errors produced by the XXTEA library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum XxteaError {
    /// Raw key is shorter than the required 16 bytes.
    InvalidKeyLength,
    /// Decrypted length field is inconsistent with the ciphertext size.
    InvalidCiphertext,
    /// Decrypted bytes do not form a valid UTF-8 string.
    InvalidUtf8,
}

impl fmt::Display for XxteaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XxteaError::InvalidKeyLength => {
                write!(f, "Key must be at least 16 bytes long")
            }
            XxteaError::InvalidCiphertext => {
                write!(f, "Input data is not a valid XXTEA ciphertext")
            }
            XxteaError::InvalidUtf8 => {
                write!(f, "Decrypted data is not valid UTF-8")
            }
        }
    }
}

impl std::error::Error for XxteaError {}
