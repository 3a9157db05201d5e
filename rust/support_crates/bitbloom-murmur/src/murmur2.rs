//! MurmurHash2, 32-bit variant.

use bitbloom_common::{Result, error::Error};
use byteorder::{ByteOrder, LE};

/// Multiplicative mixing constant.
pub const MURMUR2_M: u32 = 0x5bd1_e995;

/// Right-shift applied to each mixed 4-byte chunk.
pub const MURMUR2_R: u32 = 24;

/// Hashes the whole of `data` with the given `seed`.
///
/// Input is consumed in 4-byte little-endian words regardless of the host
/// endianness, so the result is identical on every platform.
pub fn murmurhash2(data: &[u8], seed: u32) -> u32 {
    // Lengths are folded into the seed modulo 2^32.
    let mut h = seed ^ (data.len() as u32);

    let mut chunks = data.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = LE::read_u32(chunk);
        k = k.wrapping_mul(MURMUR2_M);
        k ^= k >> MURMUR2_R;
        k = k.wrapping_mul(MURMUR2_M);

        h = h.wrapping_mul(MURMUR2_M);
        h ^= k;
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        if tail.len() == 3 {
            h ^= (tail[2] as u32) << 16;
        }
        if tail.len() >= 2 {
            h ^= (tail[1] as u32) << 8;
        }
        h ^= tail[0] as u32;
        h = h.wrapping_mul(MURMUR2_M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(MURMUR2_M);
    h ^= h >> 15;
    h
}

/// Hashes the first `len` bytes of `data`.
///
/// Negative lengths and lengths past the end of `data` are rejected as
/// invalid arguments.
pub fn murmurhash2_with_len(data: &[u8], len: i64, seed: u32) -> Result<u32> {
    if len < 0 {
        log::debug!("murmurhash2: rejecting negative length {len}");
        return Err(Error::invalid_arg("len", "length must be non-negative"));
    }
    let len = usize::try_from(len)
        .ok()
        .filter(|&len| len <= data.len())
        .ok_or_else(|| {
            Error::invalid_arg(
                "len",
                format!("length {len} exceeds input of {} bytes", data.len()),
            )
        })?;
    Ok(murmurhash2(&data[..len], seed))
}

/// Returns the prefix of `data` before the first zero byte.
///
/// Filter keys are treated as C strings: an embedded zero terminates the
/// effective key, so `b"ab\0cd"` and `b"ab"` hash identically.
#[inline]
pub fn c_str_key(data: &[u8]) -> &[u8] {
    match data.iter().position(|&b| b == 0) {
        Some(end) => &data[..end],
        None => data,
    }
}
