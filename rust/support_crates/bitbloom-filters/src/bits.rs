//! Bit addressing shared by the owned filter and the borrowed view.
//!
//! Bit `p` lives in byte `p / 8` at bit `p % 8`, counting from the least
//! significant bit. This layout is the serialized format.

use bitbloom_murmur::{c_str_key, murmurhash2};

use crate::config::BLOOM_FILTER_SEEDS;

/// Computes the bit position selected by `key` under `seed` in a filter of
/// `num_bits` bits.
///
/// Keys are treated as C strings; bytes from the first zero onward are ignored.
#[inline]
pub fn bit_index(key: &[u8], seed: u32, num_bits: u64) -> u32 {
    index_of(c_str_key(key), seed, num_bits)
}

#[inline]
fn index_of(effective_key: &[u8], seed: u32, num_bits: u64) -> u32 {
    debug_assert!(num_bits > 0);
    (u64::from(murmurhash2(effective_key, seed)) % num_bits) as u32
}

#[inline]
fn num_bits_of(bits: &[u8]) -> u64 {
    bits.len() as u64 * 8
}

#[inline]
pub(crate) fn set_bit(bits: &mut [u8], index: u32) {
    bits[(index / 8) as usize] |= 1u8 << (index % 8);
}

#[inline]
pub(crate) fn is_bit_set(bits: &[u8], index: u32) -> bool {
    bits[(index / 8) as usize] & (1u8 << (index % 8)) != 0
}

/// Sets the `k` bits selected by `key`. `bits` must be non-empty.
pub(crate) fn insert_key(bits: &mut [u8], key: &[u8]) {
    let key = c_str_key(key);
    let num_bits = num_bits_of(bits);
    for seed in BLOOM_FILTER_SEEDS {
        set_bit(bits, index_of(key, seed, num_bits));
    }
}

/// Checks whether all `k` bits selected by `key` are set, stopping at the
/// first clear bit. `bits` must be non-empty.
pub(crate) fn probe_key(bits: &[u8], key: &[u8]) -> bool {
    let key = c_str_key(key);
    let num_bits = num_bits_of(bits);
    BLOOM_FILTER_SEEDS
        .iter()
        .all(|&seed| is_bit_set(bits, index_of(key, seed, num_bits)))
}

pub(crate) fn count_set_bits(bits: &[u8]) -> u64 {
    bits.iter().map(|b| u64::from(b.count_ones())).sum()
}
