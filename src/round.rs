//! XXTEA round transform operating on 32-bit word sequences.
//!
//! Implements the Feistel-style forward and inverse transforms of the
//! corrected block TEA algorithm (Needham/Wheeler), byte-for-byte
//! compatible with the Razensoft.XXTEA reference. All arithmetic is
//! unsigned 32-bit with silent wraparound; this mirrors the reference's
//! `unchecked` blocks and is load-bearing for compatibility.

use crate::key::KEY_WORDS;

/// Golden-ratio round constant shared by the whole TEA family.
const DELTA: u32 = 0x9E3779B9;

/// Number of full rounds for a sequence whose last index is `n`.
fn round_count(n: usize) -> usize {
    6 + 52 / (n + 1)
}

/// Non-linear mixing function combining two neighboring words, the
/// running sum, and one key word selected by `(p & 3) ^ e`.
fn mx(sum: u32, y: u32, z: u32, p: usize, e: u32, key: &[u32; KEY_WORDS]) -> u32 {
    (((z >> 5) ^ (y << 2)).wrapping_add((y >> 3) ^ (z << 4)))
        ^ ((sum ^ y).wrapping_add(key[(p & 3) ^ e as usize] ^ z))
}

/// Applies the forward XXTEA transform in place.
///
/// Sequences of fewer than two words are left unchanged; no mixing is
/// meaningful below that size.
///
/// # Parameters
/// - `v`: Word sequence mutated in place.
/// - `key`: Normalized 4-word key.
pub(crate) fn encrypt_words(v: &mut [u32], key: &[u32; KEY_WORDS]) {
    if v.len() < 2 {
        return;
    }
    let n = v.len() - 1;
    let mut z = v[n];
    let mut sum: u32 = 0;
    for _ in 0..round_count(n) {
        sum = sum.wrapping_add(DELTA);
        let e = (sum >> 2) & 3;
        for p in 0..n {
            let y = v[p + 1];
            v[p] = v[p].wrapping_add(mx(sum, y, z, p, e, key));
            z = v[p];
        }
        // Wraparound pair: last word mixes with the first.
        let y = v[0];
        v[n] = v[n].wrapping_add(mx(sum, y, z, n, e, key));
        z = v[n];
    }
}

/// Applies the inverse XXTEA transform in place.
///
/// Exact inverse of [`encrypt_words`]: the sum counts down from
/// `rounds * DELTA` to zero while words are visited in reverse.
///
/// # Parameters
/// - `v`: Word sequence mutated in place.
/// - `key`: Normalized 4-word key.
pub(crate) fn decrypt_words(v: &mut [u32], key: &[u32; KEY_WORDS]) {
    if v.len() < 2 {
        return;
    }
    let n = v.len() - 1;
    let mut sum = (round_count(n) as u32).wrapping_mul(DELTA);
    let mut y = v[0];
    while sum != 0 {
        let e = (sum >> 2) & 3;
        for p in (1..=n).rev() {
            let z = v[p - 1];
            v[p] = v[p].wrapping_sub(mx(sum, y, z, p, e, key));
            y = v[p];
        }
        let z = v[n];
        v[0] = v[0].wrapping_sub(mx(sum, y, z, 0, e, key));
        y = v[0];
        sum = sum.wrapping_sub(DELTA);
    }
}
