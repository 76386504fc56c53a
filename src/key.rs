//! Key normalization: raw key bytes to the fixed 128-bit cipher key.
//!
//! The round transform consumes exactly four 32-bit words. This module
//! replicates `FixKey` from the reference implementation: the first 16
//! bytes of the raw key are copied into four little-endian words, with
//! no hashing, stretching, or padding.

use crate::error::XxteaError;

/// Number of raw key bytes consumed.
pub(crate) const KEY_SIZE: usize = 16;

/// Number of 32-bit words in a normalized key.
pub(crate) const KEY_WORDS: usize = 4;

/// Normalizes a raw key byte slice into the fixed 4-word cipher key.
///
/// Copies exactly the first 16 bytes into 4 little-endian words. Bytes
/// beyond the 16th are ignored, matching the reference implementation.
/// The reference reads out of bounds for shorter keys; here they are
/// rejected instead.
///
/// # Parameters
/// - `key`: Raw key bytes; at least 16 bytes.
///
/// # Returns
/// The normalized `[u32; 4]` key.
///
/// # Errors
/// Returns [`XxteaError::InvalidKeyLength`] if `key.len() < 16`.
pub(crate) fn normalize(key: &[u8]) -> Result<[u32; KEY_WORDS], XxteaError> {
    if key.len() < KEY_SIZE {
        return Err(XxteaError::InvalidKeyLength);
    }
    let mut fixed = [0u32; KEY_WORDS];
    for (i, word) in fixed.iter_mut().enumerate() {
        let offset = i * 4;
        *word = u32::from_le_bytes([
            key[offset],
            key[offset + 1],
            key[offset + 2],
            key[offset + 3],
        ]);
    }
    Ok(fixed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_exact_16_bytes() {
        let key = b"3GU45RUJR58xHub9";
        let fixed = normalize(key).unwrap();
        assert_eq!(fixed, [0x34554733, 0x4A555235, 0x78383552, 0x39627548]);
    }

    #[test]
    fn test_normalize_is_little_endian() {
        let key: [u8; 16] = [
            0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0D, 0x0E,
            0x0F, 0x10,
        ];
        let fixed = normalize(&key).unwrap();
        assert_eq!(fixed, [0x04030201, 0x08070605, 0x0C0B0A09, 0x100F0E0D]);
    }

    #[test]
    fn test_normalize_ignores_extra_bytes() {
        let short = b"3GU45RUJR58xHub9";
        let long = b"3GU45RUJR58xHub9-and-then-some";
        assert_eq!(normalize(short).unwrap(), normalize(long).unwrap());
    }

    #[test]
    fn test_normalize_rejects_short_key() {
        assert_eq!(normalize(b""), Err(XxteaError::InvalidKeyLength));
        assert_eq!(normalize(b"short"), Err(XxteaError::InvalidKeyLength));
        assert_eq!(
            normalize(&[0u8; KEY_SIZE - 1]),
            Err(XxteaError::InvalidKeyLength)
        );
    }

    #[test]
    fn test_normalize_all_zero_key() {
        let fixed = normalize(&[0u8; KEY_SIZE]).unwrap();
        assert_eq!(fixed, [0, 0, 0, 0]);
    }
}
