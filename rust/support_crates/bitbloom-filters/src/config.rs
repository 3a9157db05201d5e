//! Bloom filter seeds, sizing limits and construction configuration.

use bitbloom_common::{Result, error::Error};

/// Number of hash functions (`k`) applied to every key.
pub const NUM_HASH_FUNCTIONS: usize = 4;

/// MurmurHash2 seeds defining the `k` hash functions.
///
/// Changing any of these invalidates every filter blob produced so far.
pub const BLOOM_FILTER_SEEDS: [u32; NUM_HASH_FUNCTIONS] = [0, 1337, 37, 0xabcd];

/// Filter size in bytes used when the caller does not specify one.
pub const DEFAULT_FILTER_SIZE: usize = 1024;

/// Largest filter that can be constructed, in bytes.
///
/// At this size the bit count reaches 2^32; bits beyond it could never be
/// selected by a 32-bit hash.
pub const MAX_FILTER_SIZE: usize = 512 * 1024 * 1024;

/// Configuration for bloom filter construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BloomFilterConfig {
    /// Size of the bit array in bytes.
    pub size_bytes: usize,
}

impl Default for BloomFilterConfig {
    fn default() -> Self {
        Self {
            size_bytes: DEFAULT_FILTER_SIZE,
        }
    }
}

impl BloomFilterConfig {
    /// Creates a validated configuration for a filter of `size_bytes` bytes.
    pub fn with_size(size_bytes: usize) -> Result<Self> {
        let config = Self { size_bytes };
        config.validate()?;
        Ok(config)
    }

    /// Creates a configuration from a size supplied by an external caller as a
    /// signed integer.
    pub fn from_requested_size(size: i64) -> Result<Self> {
        let size_bytes = usize::try_from(size).map_err(|_| {
            Error::invalid_arg("size", format!("size must be positive, got {size}"))
        })?;
        Self::with_size(size_bytes)
    }

    /// Validates the configuration and returns an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.size_bytes == 0 {
            return Err(Error::invalid_arg("size", "size must be greater than 0"));
        }

        if self.size_bytes > MAX_FILTER_SIZE {
            return Err(Error::invalid_arg(
                "size",
                format!(
                    "size {} exceeds the maximum of {MAX_FILTER_SIZE} bytes",
                    self.size_bytes
                ),
            ));
        }

        Ok(())
    }

    /// Number of addressable bits (`m`).
    pub fn num_bits(&self) -> u64 {
        self.size_bytes as u64 * 8
    }
}

/// Expected false positive probability after `items` distinct keys were added
/// to a filter of `size_bytes` bytes: `(1 - e^(-kn/m))^k`.
pub fn estimated_fpp(size_bytes: usize, items: u64) -> f64 {
    if size_bytes == 0 {
        return 1.0;
    }
    let k = NUM_HASH_FUNCTIONS as f64;
    let m = size_bytes as f64 * 8.0;
    let n = items as f64;
    (1.0 - (-k * n / m).exp()).powf(k)
}
