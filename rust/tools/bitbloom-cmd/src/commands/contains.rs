use std::io::Write;

use anyhow::{Context, Result};
use bitbloom::filters::BloomFilterView;

use crate::utils;

pub fn run(filter_path: &str, keys: &[String], out: &mut impl Write) -> Result<()> {
    let blob = utils::read_filter(filter_path)?;
    let view = BloomFilterView::new(&blob)
        .with_context(|| format!("Invalid filter blob: {filter_path}"))?;

    for key in keys {
        writeln!(out, "{key}\t{}", view.contains(key.as_bytes()))?;
    }
    Ok(())
}
