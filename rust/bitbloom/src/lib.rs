//! # Bitbloom: Bloom filters as raw byte blobs
//!
//! Bitbloom builds fixed-size Bloom filters incrementally over a stream of keys,
//! exports them as a plain byte blob, and answers membership queries directly
//! against such a blob without rebuilding the filter.
//!
//! ## Crates
//!
//! * [`murmur`]: the seeded 32-bit MurmurHash2 every filter is built on
//! * [`filters`]: owned filters, construction sessions and zero-copy views
//! * [`functions`]: the callable surface a host engine registers (`murmurhash`,
//!   `bloomfilter`, `bloom_contains`) over dynamically typed arguments

pub use bitbloom_common as common;
pub use bitbloom_filters as filters;
pub use bitbloom_murmur as murmur;

pub mod functions;
pub mod value;

pub use value::Value;
