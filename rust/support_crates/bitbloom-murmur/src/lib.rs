//! Seeded, non-cryptographic 32-bit MurmurHash2.
//!
//! The output is bit-for-bit stable across platforms: Bloom filter blobs written
//! by one process are probed by another, so any change here invalidates every
//! persisted filter.

pub mod murmur2;

#[cfg(test)]
mod tests;

pub use murmur2::{MURMUR2_M, MURMUR2_R, c_str_key, murmurhash2, murmurhash2_with_len};
