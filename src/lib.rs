//! XXTEA symmetric block cipher.
//!
//! XXTEA (corrected block TEA) is a keyed, reversible transform over a
//! variable-length byte sequence using a 128-bit key. This crate produces
//! output bit-for-bit compatible with the canonical reference algorithm
//! and with the Razensoft.XXTEA C# implementation.
//!
//! XXTEA provides confidentiality only: there is no authentication. The
//! single integrity signal is the length word embedded during encryption,
//! which is validated on decryption and rejects most corrupted or
//! wrong-key input.
//!
//! # Architecture
//!
//! ```text
//! key::normalize        (raw key bytes → fixed [u32; 4] key)
//!     ↓
//! converter::byte_to_word   (bytes → little-endian words, + length word)
//!     ↓
//! round::encrypt_words / decrypt_words   (in-place Feistel-style rounds)
//!     ↓
//! converter::word_to_byte[_with_length]  (words → bytes, length check)
//! ```
//!
//! # Examples
//!
//! One-shot functions:
//!
//! ```
//! let key = b"3GU45RUJR58xHub9";
//!
//! let ciphertext = xxtea::encrypt(b"Lorem ipsum dolor sit amet", key).unwrap();
//! let plaintext = xxtea::decrypt(&ciphertext, key).unwrap();
//! assert_eq!(plaintext, b"Lorem ipsum dolor sit amet");
//! ```
//!
//! A cipher instance normalizes the key once and may be shared across
//! threads:
//!
//! ```
//! use xxtea::Xxtea;
//!
//! let cipher = Xxtea::new(b"3GU45RUJR58xHub9").unwrap();
//! let ciphertext = cipher.encrypt(b"payload");
//! assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"payload");
//! ```

#![deny(clippy::all)]

pub mod error;

mod key;
mod round;
mod xxtea;
pub(crate) mod utils;

pub use crate::xxtea::{decrypt, decrypt_to_string, encrypt, Xxtea};
pub use error::XxteaError;
