//! Read-only Bloom filter view over serialized bytes.

use bitbloom_common::{Result, verify_data};

use crate::{
    bits::{count_set_bits, probe_key},
    filter::BloomFilter,
};

/// A zero-copy view of a serialized Bloom filter.
///
/// The filter size is the length of the borrowed blob; no other metadata is
/// stored or checked. Views hold no mutable state and may be shared freely
/// across threads.
#[derive(Debug, Clone, Copy)]
pub struct BloomFilterView<'a> {
    bits: &'a [u8],
}

impl<'a> BloomFilterView<'a> {
    /// Creates a view over a blob produced by [`BloomFilter::to_bytes`].
    ///
    /// An empty blob is rejected: it has no addressable bits.
    pub fn new(blob: &'a [u8]) -> Result<Self> {
        verify_data!(blob, !blob.is_empty());
        Ok(Self { bits: blob })
    }

    pub(crate) fn from_filter(filter: &'a BloomFilter) -> Self {
        Self {
            bits: filter.as_bytes(),
        }
    }

    /// Tests whether a key might be present in the filter.
    #[inline]
    pub fn contains(&self, key: &[u8]) -> bool {
        probe_key(self.bits, key)
    }

    pub fn size_bytes(&self) -> usize {
        self.bits.len()
    }

    pub fn num_bits(&self) -> u64 {
        self.bits.len() as u64 * 8
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bits
    }

    pub fn count_set_bits(&self) -> u64 {
        count_set_bits(self.bits)
    }

    /// Fraction of bits set, in `0.0..=1.0`.
    pub fn fill_ratio(&self) -> f64 {
        self.count_set_bits() as f64 / self.num_bits() as f64
    }
}

/// Tests `key` against a serialized filter without copying it.
pub fn contains_in_blob(key: &[u8], blob: &[u8]) -> Result<bool> {
    Ok(BloomFilterView::new(blob)?.contains(key))
}
