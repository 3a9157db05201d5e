use std::io::Write;

use anyhow::{Context, Result};
use bitbloom::{Value, functions};

pub fn run(key: &str, seed: i64, out: &mut impl Write) -> Result<()> {
    let hash = functions::murmurhash(&[Value::from(key), Value::Integer(seed)])
        .with_context(|| format!("Failed to hash key: {key}"))?;
    match hash {
        Value::Integer(hash) => writeln!(out, "{hash}")?,
        other => anyhow::bail!("Unexpected hash result: {other:?}"),
    }
    Ok(())
}
