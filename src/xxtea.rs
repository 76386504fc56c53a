//! XXTEA cipher: public encrypt/decrypt surface.
//!
//! Ties together key normalization, byte/word packing, and the round
//! transform. Compatible byte-for-byte with the Razensoft.XXTEA C#
//! implementation.

use crate::error::XxteaError;
use crate::key::{self, KEY_WORDS};
use crate::round;
use crate::utils::converter;

/// Encrypts `data` under a previously normalized key.
fn encrypt_with_key(data: &[u8], key: &[u32; KEY_WORDS]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut words = converter::byte_to_word(data, true);
    round::encrypt_words(&mut words, key);
    converter::word_to_byte(&words)
}

/// Decrypts `data` under a previously normalized key.
fn decrypt_with_key(data: &[u8], key: &[u32; KEY_WORDS]) -> Result<Vec<u8>, XxteaError> {
    if data.is_empty() {
        return Ok(Vec::new());
    }
    let mut words = converter::byte_to_word(data, false);
    round::decrypt_words(&mut words, key);
    converter::word_to_byte_with_length(&words)
}

/// Encrypts a byte slice with a raw key.
///
/// Textual data or keys are passed as their UTF-8 bytes
/// (`str::as_bytes`); Rust strings are already BOM-less UTF-8, so no
/// further encoding step exists.
///
/// # Parameters
/// - `data`: Plaintext bytes. Empty input is returned as an empty
///   ciphertext without touching the cipher.
/// - `key`: Raw key bytes; only the first 16 are used.
///
/// # Returns
/// The ciphertext. Its length is `(ceil(data.len() / 4) + 1) * 4` bytes
/// for non-empty input.
///
/// # Errors
/// Returns [`XxteaError::InvalidKeyLength`] if `key.len() < 16`.
///
/// # Examples
///
/// ```
/// let ciphertext = xxtea::encrypt(b"Lorem ipsum", b"3GU45RUJR58xHub9").unwrap();
/// let plaintext = xxtea::decrypt(&ciphertext, b"3GU45RUJR58xHub9").unwrap();
/// assert_eq!(plaintext, b"Lorem ipsum");
/// ```
pub fn encrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, XxteaError> {
    let fixed = key::normalize(key)?;
    Ok(encrypt_with_key(data, &fixed))
}

/// Decrypts a byte slice with a raw key.
///
/// # Parameters
/// - `data`: Ciphertext bytes. Empty input is returned as an empty
///   plaintext without touching the cipher.
/// - `key`: Raw key bytes; only the first 16 are used.
///
/// # Returns
/// The recovered plaintext, truncated to its original length.
///
/// # Errors
/// - [`XxteaError::InvalidKeyLength`] if `key.len() < 16`.
/// - [`XxteaError::InvalidCiphertext`] if the decrypted length field is
///   inconsistent with the ciphertext size, which is what corrupted,
///   truncated, or wrong-key input produces.
pub fn decrypt(data: &[u8], key: &[u8]) -> Result<Vec<u8>, XxteaError> {
    let fixed = key::normalize(key)?;
    decrypt_with_key(data, &fixed)
}

/// Decrypts a byte slice and decodes the result as UTF-8.
///
/// # Errors
/// Everything [`decrypt`] returns, plus [`XxteaError::InvalidUtf8`] if
/// the plaintext is not valid UTF-8.
///
/// # Examples
///
/// ```
/// let ciphertext = xxtea::encrypt("Lorem ipsum".as_bytes(), b"3GU45RUJR58xHub9").unwrap();
/// let text = xxtea::decrypt_to_string(&ciphertext, b"3GU45RUJR58xHub9").unwrap();
/// assert_eq!(text, "Lorem ipsum");
/// ```
pub fn decrypt_to_string(data: &[u8], key: &[u8]) -> Result<String, XxteaError> {
    String::from_utf8(decrypt(data, key)?).map_err(|_| XxteaError::InvalidUtf8)
}

/// XXTEA cipher instance holding a normalized key.
///
/// Normalizes the raw key once at construction and reuses it across
/// calls. The instance is immutable after construction; all methods take
/// `&self`, so one instance may be shared freely across threads.
///
/// # Examples
///
/// ```
/// use xxtea::Xxtea;
///
/// let cipher = Xxtea::new(b"3GU45RUJR58xHub9").unwrap();
/// let ciphertext = cipher.encrypt(b"Lorem ipsum");
/// assert_eq!(cipher.decrypt(&ciphertext).unwrap(), b"Lorem ipsum");
/// ```
#[derive(Debug, Clone)]
pub struct Xxtea {
    key: [u32; KEY_WORDS],
}

impl Xxtea {
    /// Creates a cipher instance from a raw key.
    ///
    /// # Parameters
    /// - `key`: Raw key bytes; only the first 16 are used. Textual keys
    ///   are passed as their UTF-8 bytes.
    ///
    /// # Errors
    /// Returns [`XxteaError::InvalidKeyLength`] if `key.len() < 16`.
    pub fn new(key: &[u8]) -> Result<Self, XxteaError> {
        Ok(Self {
            key: key::normalize(key)?,
        })
    }

    /// Encrypts a byte slice under the bound key.
    ///
    /// Infallible: the key was validated at construction and the
    /// transform itself has no failure modes.
    pub fn encrypt(&self, data: &[u8]) -> Vec<u8> {
        encrypt_with_key(data, &self.key)
    }

    /// Decrypts a byte slice under the bound key.
    ///
    /// # Errors
    /// Returns [`XxteaError::InvalidCiphertext`] if the decrypted length
    /// field is inconsistent with the ciphertext size.
    pub fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, XxteaError> {
        decrypt_with_key(data, &self.key)
    }

    /// Decrypts a byte slice under the bound key and decodes the result
    /// as UTF-8.
    ///
    /// # Errors
    /// Everything [`decrypt`](Self::decrypt) returns, plus
    /// [`XxteaError::InvalidUtf8`] if the plaintext is not valid UTF-8.
    pub fn decrypt_to_string(&self, data: &[u8]) -> Result<String, XxteaError> {
        String::from_utf8(self.decrypt(data)?).map_err(|_| XxteaError::InvalidUtf8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"3GU45RUJR58xHub9";

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let data = b"The quick brown fox jumps over the lazy dog";
        let ciphertext = encrypt(data, KEY).unwrap();
        assert_ne!(&ciphertext[..], &data[..]);
        assert_eq!(decrypt(&ciphertext, KEY).unwrap(), data);
    }

    #[test]
    fn test_ciphertext_length_is_word_aligned_plus_length_word() {
        for len in 1..=20usize {
            let data = vec![0x5Au8; len];
            let ciphertext = encrypt(&data, KEY).unwrap();
            assert_eq!(ciphertext.len(), (len.div_ceil(4) + 1) * 4, "len={}", len);
        }
    }

    #[test]
    fn test_empty_data_is_identity() {
        assert!(encrypt(&[], KEY).unwrap().is_empty());
        assert!(decrypt(&[], KEY).unwrap().is_empty());
    }

    #[test]
    fn test_short_key_rejected() {
        assert_eq!(encrypt(b"data", b"short"), Err(XxteaError::InvalidKeyLength));
        assert_eq!(decrypt(b"data", b"short"), Err(XxteaError::InvalidKeyLength));
        assert!(matches!(
            Xxtea::new(b"short"),
            Err(XxteaError::InvalidKeyLength)
        ));
    }

    #[test]
    fn test_instance_matches_free_functions() {
        let cipher = Xxtea::new(KEY).unwrap();
        let data = b"instance parity";
        let ciphertext = cipher.encrypt(data);
        assert_eq!(ciphertext, encrypt(data, KEY).unwrap());
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), data);
    }

    #[test]
    fn test_decrypt_to_string_rejects_non_utf8() {
        let ciphertext = encrypt(&[0xFF, 0xFE, 0x80], KEY).unwrap();
        assert_eq!(
            decrypt_to_string(&ciphertext, KEY),
            Err(XxteaError::InvalidUtf8)
        );
    }

    #[test]
    fn test_wrong_key_does_not_yield_plaintext() {
        let ciphertext = encrypt(b"some secret payload", KEY).unwrap();
        let wrong = decrypt(&ciphertext, b"0000000000000000");
        match wrong {
            // The length check catches almost all wrong-key decrypts.
            Err(XxteaError::InvalidCiphertext) => {}
            Ok(bytes) => assert_ne!(bytes, b"some secret payload"),
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }
}
