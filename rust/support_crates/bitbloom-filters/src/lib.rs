//! Bloom filter support for bitbloom.
//!
//! A filter is a fixed-size bit array probed at `k = 4` positions per key, each
//! derived from MurmurHash2 with a distinct seed. The serialized form is the raw
//! bit array and nothing else, so a blob can be queried in place without
//! rebuilding the filter. This crate includes:
//!
//! - The owned [`BloomFilter`] and its fixed seed/size configuration
//! - [`BloomFilterCollector`], an incremental construction session
//! - [`BloomFilterView`], a zero-copy read-only view over a serialized blob

pub mod bits;
pub mod builder;
pub mod config;
pub mod decoder;
pub mod filter;


pub use builder::BloomFilterCollector;
pub use config::*;
pub use decoder::{BloomFilterView, contains_in_blob};
pub use filter::{BloomFilter, FilterState};
