//! Owned, mutable Bloom filter.

use bitbloom_common::{
    Result,
    result::{try_alloc_zeroed, try_copy_bytes},
};

use crate::{
    bits::{count_set_bits, insert_key, probe_key},
    config::{BloomFilterConfig, estimated_fpp},
    decoder::BloomFilterView,
};

/// Lifecycle state of a live filter.
///
/// Serialization does not change the state: the exported blob is a copy, and
/// the filter may keep accepting keys afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    /// Just allocated; every bit is zero.
    Empty,
    /// At least one key has been added.
    Populated,
}

/// A fixed-size Bloom filter that exclusively owns its bit array.
///
/// Bits are only ever set, never cleared, so a key that was added always
/// tests positive.
#[derive(Debug, Clone)]
pub struct BloomFilter {
    bits: Vec<u8>,
    num_added: u64,
}

impl BloomFilter {
    /// Allocates a zeroed filter. Fails with an out-of-memory error instead of
    /// aborting when the bit array cannot be allocated.
    pub fn new(config: &BloomFilterConfig) -> Result<Self> {
        config.validate()?;
        let bits = try_alloc_zeroed(config.size_bytes, "bloom filter bits")?;
        Ok(Self { bits, num_added: 0 })
    }

    /// Allocates a zeroed filter of `size_bytes` bytes.
    pub fn with_size(size_bytes: usize) -> Result<Self> {
        Self::new(&BloomFilterConfig::with_size(size_bytes)?)
    }

    /// Adds a key to the filter.
    #[inline]
    pub fn add(&mut self, key: &[u8]) {
        insert_key(&mut self.bits, key);
        self.num_added += 1;
    }

    /// Tests whether a key might be present in the filter.
    #[inline]
    pub fn contains(&self, key: &[u8]) -> bool {
        probe_key(&self.bits, key)
    }

    pub fn size_bytes(&self) -> usize {
        self.bits.len()
    }

    pub fn num_bits(&self) -> u64 {
        self.bits.len() as u64 * 8
    }

    /// Number of `add` calls applied, duplicates included.
    pub fn num_added(&self) -> u64 {
        self.num_added
    }

    pub fn state(&self) -> FilterState {
        if self.num_added == 0 {
            FilterState::Empty
        } else {
            FilterState::Populated
        }
    }

    /// Returns the live bit array.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bits
    }

    /// Exports a copy of the bit array as the serialized filter.
    ///
    /// The returned blob is independent of the filter: later `add` calls do not
    /// affect it.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        try_copy_bytes(&self.bits, "bloom filter blob")
    }

    /// Borrows the filter as a read-only view, as if it had been serialized.
    pub fn as_view(&self) -> BloomFilterView<'_> {
        BloomFilterView::from_filter(self)
    }

    pub fn count_set_bits(&self) -> u64 {
        count_set_bits(&self.bits)
    }

    /// Expected false positive probability, counting every `add` call as a
    /// distinct key.
    pub fn estimated_fpp(&self) -> f64 {
        estimated_fpp(self.bits.len(), self.num_added)
    }
}
