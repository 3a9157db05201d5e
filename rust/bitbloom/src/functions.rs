//! Functions exposed to a host engine.
//!
//! Each function takes its arguments as a slice of [`Value`]s and validates
//! arity and types itself, so a host can forward its call arguments unchanged.
//! Text keys are treated as C strings: bytes from the first zero onward are
//! ignored, both when hashing and when building or probing filters.

use bitbloom_common::{Result, error::Error};
use bitbloom_filters::{BloomFilterCollector, BloomFilterConfig, contains_in_blob};
use bitbloom_murmur::{c_str_key, murmurhash2};

use crate::value::Value;

/// `murmurhash(key [, seed])`
///
/// Returns the 32-bit hash widened to a 64-bit integer, or null for a null key.
/// The seed, when present, must be an integer; only its low 32 bits are used.
pub fn murmurhash(args: &[Value]) -> Result<Value> {
    check_arity("murmurhash", args, 1, 2, "Arguments: key [seed]")?;

    let Some(key) = args[0].to_key_bytes() else {
        return Ok(Value::Null);
    };

    let seed = match args.get(1) {
        None => 0,
        Some(Value::Integer(seed)) => *seed as u32,
        Some(other) => {
            log::debug!("murmurhash: rejecting {} seed", other.type_name());
            return Err(Error::invalid_arg("seed", "Seed must be an integer"));
        }
    };

    let hash = murmurhash2(c_str_key(&key), seed);
    Ok(Value::Integer(i64::from(hash)))
}

/// State of one `bloomfilter(key [, size])` aggregate evaluation.
///
/// The host creates one per group, feeds every row through [`step`](Self::step)
/// and consumes it with [`finalize`](Self::finalize).
#[derive(Debug, Default)]
pub struct BloomFilterAggregate {
    collector: BloomFilterCollector,
}

impl BloomFilterAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an aggregate whose filters default to `config` when no size is
    /// passed.
    pub fn with_config(config: BloomFilterConfig) -> Self {
        Self {
            collector: BloomFilterCollector::with_config(config),
        }
    }

    /// Adds one row. Null keys are skipped before any other validation.
    pub fn step(&mut self, args: &[Value]) -> Result<()> {
        let Some(key) = args.first().and_then(Value::to_key_bytes) else {
            return Ok(());
        };
        check_arity("bloomfilter", args, 1, 2, "Arguments: key [size]")?;

        let size = match args.get(1) {
            None => None,
            Some(Value::Integer(size)) => Some(*size),
            Some(other) => {
                log::debug!("bloomfilter: rejecting {} size", other.type_name());
                return Err(Error::invalid_arg("size", "Size must be an integer"));
            }
        };

        self.collector.process_value(Some(c_str_key(&key)), size)
    }

    /// Number of keys added so far.
    pub fn num_values(&self) -> u64 {
        self.collector.num_values()
    }

    /// Produces the serialized filter as a blob.
    pub fn finalize(self) -> Result<Value> {
        Ok(Value::Blob(self.collector.finish()?))
    }
}

/// `bloom_contains(key, filter)`
///
/// Returns `1` if `key` may be in the serialized `filter`, `0` if it is
/// definitely absent, and null if either argument is null.
pub fn bloom_contains(args: &[Value]) -> Result<Value> {
    check_arity("bloom_contains", args, 2, 2, "Arguments: key filter")?;

    let Some(key) = args[0].to_key_bytes() else {
        return Ok(Value::Null);
    };

    let blob = match &args[1] {
        Value::Null => return Ok(Value::Null),
        Value::Blob(blob) => blob.as_slice(),
        Value::Text(text) => text.as_bytes(),
        other => {
            log::debug!("bloom_contains: rejecting {} filter", other.type_name());
            return Err(Error::invalid_arg("filter", "Filter must be a blob"));
        }
    };

    let found = contains_in_blob(&key, blob)?;
    Ok(Value::from(found))
}

fn check_arity(
    function: &str,
    args: &[Value],
    min: usize,
    max: usize,
    usage: &str,
) -> Result<()> {
    if (min..=max).contains(&args.len()) {
        Ok(())
    } else {
        log::debug!("{function}: called with {} arguments", args.len());
        Err(Error::invalid_arg(function, usage))
    }
}

/// How a registered function is invoked.
#[derive(Debug, Clone, Copy)]
pub enum FunctionKind {
    /// Called once per row with all arguments.
    Scalar(fn(&[Value]) -> Result<Value>),
    /// Creates fresh per-group state; rows go through
    /// [`BloomFilterAggregate::step`].
    Aggregate(fn() -> BloomFilterAggregate),
}

/// A function a host should register under `name` for each of `arities`.
#[derive(Debug, Clone, Copy)]
pub struct FunctionDef {
    pub name: &'static str,
    pub arities: &'static [usize],
    pub kind: FunctionKind,
}

const FUNCTIONS: &[FunctionDef] = &[
    FunctionDef {
        name: "murmurhash",
        arities: &[1, 2],
        kind: FunctionKind::Scalar(murmurhash),
    },
    FunctionDef {
        name: "bloomfilter",
        arities: &[1, 2],
        kind: FunctionKind::Aggregate(BloomFilterAggregate::new),
    },
    FunctionDef {
        name: "bloom_contains",
        arities: &[2],
        kind: FunctionKind::Scalar(bloom_contains),
    },
];

/// All functions a host should register.
pub fn registered_functions() -> &'static [FunctionDef] {
    FUNCTIONS
}

/// Finds the function registered under `name` for `argc` arguments.
pub fn find_function(name: &str, argc: usize) -> Option<&'static FunctionDef> {
    FUNCTIONS
        .iter()
        .find(|def| def.name.eq_ignore_ascii_case(name) && def.arities.contains(&argc))
}
