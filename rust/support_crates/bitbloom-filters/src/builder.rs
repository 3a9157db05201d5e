//! Incremental Bloom filter construction over a stream of keys.

use bitbloom_common::{Result, error::Error};

use crate::{
    config::BloomFilterConfig,
    filter::{BloomFilter, FilterState},
};

/// How the session size was established.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionSize {
    Default(usize),
    Explicit(usize),
}

impl SessionSize {
    fn bytes(self) -> usize {
        match self {
            SessionSize::Default(size) | SessionSize::Explicit(size) => size,
        }
    }
}

/// A construction session: collects keys into one filter and exports it once.
///
/// The bit array is allocated lazily on the first non-null key, sized either by
/// the size passed with that key or by the session default. Every later key
/// must agree with that choice. [`finish`](Self::finish) consumes the session,
/// so a serialized session cannot receive more keys.
#[derive(Debug)]
pub struct BloomFilterCollector {
    config: BloomFilterConfig,
    size: Option<SessionSize>,
    filter: Option<BloomFilter>,
}

impl Default for BloomFilterCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomFilterCollector {
    /// Creates a session whose default filter size is
    /// [`DEFAULT_FILTER_SIZE`](crate::config::DEFAULT_FILTER_SIZE).
    pub fn new() -> Self {
        Self::with_config(BloomFilterConfig::default())
    }

    /// Creates a session with the given default configuration.
    pub fn with_config(config: BloomFilterConfig) -> Self {
        Self {
            config,
            size: None,
            filter: None,
        }
    }

    /// Processes one step of the session.
    ///
    /// A `None` key is skipped. `size` is the filter size in bytes as supplied by
    /// the caller; `None` selects the session default. Argument errors leave the
    /// session unchanged.
    pub fn process_value(&mut self, key: Option<&[u8]>, size: Option<i64>) -> Result<()> {
        let Some(key) = key else {
            return Ok(());
        };

        let requested = match size {
            Some(size) => {
                SessionSize::Explicit(BloomFilterConfig::from_requested_size(size)?.size_bytes)
            }
            None => SessionSize::Default(self.config.size_bytes),
        };
        self.check_consistent_size(requested)?;

        match self.filter.as_mut() {
            Some(filter) => filter.add(key),
            None => {
                let config = BloomFilterConfig::with_size(requested.bytes())?;
                let mut filter = BloomFilter::new(&config)?;
                log::debug!(
                    "bloom filter session allocated {} bytes",
                    filter.size_bytes()
                );
                filter.add(key);
                self.filter = Some(filter);
                self.size = Some(requested);
            }
        }
        Ok(())
    }

    /// Adds a key using the session size.
    pub fn add(&mut self, key: &[u8]) -> Result<()> {
        let size = match self.size {
            Some(SessionSize::Explicit(size)) => Some(size as i64),
            _ => None,
        };
        self.process_value(Some(key), size)
    }

    fn check_consistent_size(&self, requested: SessionSize) -> Result<()> {
        match (self.size, requested) {
            (None, _) => Ok(()),
            (Some(SessionSize::Explicit(current)), SessionSize::Default(_)) => {
                log::debug!("bloom filter session: size omitted after explicit size {current}");
                Err(Error::invalid_arg(
                    "size",
                    format!("size must be supplied on every step, session uses {current} bytes"),
                ))
            }
            (Some(current), requested) if current.bytes() == requested.bytes() => Ok(()),
            (Some(current), requested) => {
                log::debug!(
                    "bloom filter session: size {} conflicts with {}",
                    requested.bytes(),
                    current.bytes()
                );
                Err(Error::invalid_arg(
                    "size",
                    format!(
                        "inconsistent size {}, session uses {} bytes",
                        requested.bytes(),
                        current.bytes()
                    ),
                ))
            }
        }
    }

    pub fn state(&self) -> FilterState {
        self.filter
            .as_ref()
            .map_or(FilterState::Empty, |filter| filter.state())
    }

    /// Size of the filter this session produces, in bytes.
    pub fn size_bytes(&self) -> usize {
        self.size.map_or(self.config.size_bytes, |size| size.bytes())
    }

    /// Number of non-null keys added so far.
    pub fn num_values(&self) -> u64 {
        self.filter.as_ref().map_or(0, |filter| filter.num_added())
    }

    /// Returns the in-progress filter, if any key has been added.
    pub fn filter(&self) -> Option<&BloomFilter> {
        self.filter.as_ref()
    }

    /// Finalizes the session and returns the serialized filter blob.
    ///
    /// A session that never received a key yields an all-zero blob of the
    /// default size. The working bit array is released when this returns,
    /// whether or not the export succeeded.
    pub fn finish(self) -> Result<Vec<u8>> {
        let filter = match self.filter {
            Some(filter) => filter,
            None => BloomFilter::new(&self.config)?,
        };
        let blob = filter.to_bytes()?;
        log::debug!(
            "bloom filter session finished: {} keys, {} bytes",
            filter.num_added(),
            blob.len()
        );
        Ok(blob)
    }
}
