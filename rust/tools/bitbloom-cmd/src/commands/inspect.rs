use std::io::Write;

use anyhow::{Context, Result};
use bitbloom::filters::{BloomFilterView, NUM_HASH_FUNCTIONS};

use crate::utils;

pub fn run(filter_path: &str, out: &mut impl Write) -> Result<()> {
    let blob = utils::read_filter(filter_path)?;
    let view = BloomFilterView::new(&blob)
        .with_context(|| format!("Invalid filter blob: {filter_path}"))?;

    writeln!(out, "Filter: {filter_path}")?;
    writeln!(
        out,
        "  Size: {} ({} bits)",
        utils::format_size(view.size_bytes() as u64),
        view.num_bits()
    )?;
    writeln!(out, "  Hash functions: {NUM_HASH_FUNCTIONS}")?;
    writeln!(out, "  Bits set: {}", view.count_set_bits())?;
    writeln!(out, "  Fill ratio: {:.4}", view.fill_ratio())?;
    // With k hashes, fill^k approximates the chance a random key tests positive.
    writeln!(
        out,
        "  Current false positive rate: {:.6}",
        view.fill_ratio().powi(NUM_HASH_FUNCTIONS as i32)
    )?;
    Ok(())
}
