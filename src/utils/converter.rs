//! Byte-to-word conversion utilities.
//!
//! Provides conversion between byte slices and `u32` word sequences using
//! little-endian byte ordering, replicating the behavior of `ToUInt32Array`
//! and `ToByteArray` from the Razensoft.XXTEA reference, including the
//! length-word convention used to recover the exact plaintext size on
//! decryption.

use crate::error::XxteaError;

/// Converts a byte slice to a `Vec<u32>` using little-endian byte ordering.
///
/// Each group of 4 bytes is combined into a single `u32` where the first
/// byte occupies the least significant position; a trailing incomplete
/// group is zero-padded.
///
/// # Parameters
/// - `input`: Byte slice of any length.
/// - `include_length`: When `true`, one extra word is appended holding the
///   exact byte length of `input`. Used when packing plaintext for
///   encryption, so the original length survives the word-aligned cipher.
///
/// # Returns
/// A `Vec<u32>` of `ceil(input.len() / 4)` data words, plus the length
/// word when requested.
pub(crate) fn byte_to_word(input: &[u8], include_length: bool) -> Vec<u32> {
    let num_words = input.len().div_ceil(4);
    let mut output = vec![0u32; num_words + usize::from(include_length)];
    for (i, &byte) in input.iter().enumerate() {
        output[i >> 2] |= u32::from(byte) << (8 * (i & 3));
    }
    if include_length {
        output[num_words] = input.len() as u32;
    }
    output
}

/// Converts a slice of `u32` words to a `Vec<u8>` using little-endian byte
/// ordering.
///
/// # Parameters
/// - `input`: Slice of words.
///
/// # Returns
/// A `Vec<u8>` containing `input.len() * 4` bytes.
pub(crate) fn word_to_byte(input: &[u32]) -> Vec<u8> {
    let mut output = Vec::with_capacity(input.len() * 4);
    for &word in input {
        output.extend_from_slice(&word.to_le_bytes());
    }
    output
}

/// Converts a length-prefixed word sequence back to its original bytes.
///
/// The last word must hold the byte length `m` recorded by
/// [`byte_to_word`] with `include_length = true`. With `cap` the byte
/// capacity of the data words (`(input.len() - 1) * 4`), `m` is accepted
/// only when `cap - 3 <= m <= cap`: the last data word carried between 1
/// and 4 meaningful bytes before zero-padding. Any other value means the
/// words were not produced by a matching encryption and the data is
/// rejected. This is the only structural integrity check XXTEA offers.
///
/// # Parameters
/// - `input`: Decrypted word sequence, length word last.
///
/// # Returns
/// The first `m` bytes of the little-endian expansion of the data words.
///
/// # Errors
/// Returns [`XxteaError::InvalidCiphertext`] if `input` is empty or the
/// recorded length falls outside the valid range.
pub(crate) fn word_to_byte_with_length(input: &[u32]) -> Result<Vec<u8>, XxteaError> {
    let (&length_word, data) = match input.split_last() {
        Some(parts) => parts,
        None => return Err(XxteaError::InvalidCiphertext),
    };
    let m = length_word as i64;
    let cap = data.len() as i64 * 4;
    if m < cap - 3 || m > cap {
        return Err(XxteaError::InvalidCiphertext);
    }
    let mut output = word_to_byte(data);
    output.truncate(m as usize);
    Ok(output)
}
