//! Build command implementation

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::time::Instant;

use anyhow::{Context, Result};
use bitbloom::filters::{BloomFilterCollector, estimated_fpp};

use crate::utils;

/// Run the build command
pub fn run(input: &str, output: &str, size: Option<i64>, out: &mut impl Write) -> Result<()> {
    let start_time = Instant::now();

    let collector = if input == "-" {
        collect_keys(io::stdin().lock(), size)?
    } else {
        utils::validate_file_exists(input)?;
        let file = File::open(input).with_context(|| format!("Failed to open input: {input}"))?;
        collect_keys(BufReader::new(file), size)?
    };

    let num_values = collector.num_values();
    let blob = collector
        .finish()
        .with_context(|| "Failed to serialize filter")?;
    std::fs::write(output, &blob).with_context(|| format!("Failed to write filter: {output}"))?;

    log::info!(
        "built filter from {num_values} keys in {:.3}s",
        start_time.elapsed().as_secs_f64()
    );

    writeln!(out, "Filter written to {output}:")?;
    writeln!(out, "  Keys: {num_values}")?;
    writeln!(out, "  Size: {}", utils::format_size(blob.len() as u64))?;
    writeln!(
        out,
        "  Estimated false positive rate: {:.6}",
        estimated_fpp(blob.len(), num_values)
    )?;
    Ok(())
}

/// Feeds every non-empty line of `reader` into a new construction session.
/// Empty lines are treated as null keys.
pub fn collect_keys(mut reader: impl BufRead, size: Option<i64>) -> Result<BloomFilterCollector> {
    let mut collector = BloomFilterCollector::new();
    let mut line = Vec::new();
    let mut line_no = 0u64;

    loop {
        line.clear();
        if reader
            .read_until(b'\n', &mut line)
            .with_context(|| "Failed to read keys")?
            == 0
        {
            break;
        }
        line_no += 1;

        let key = trim_line_ending(&line);
        let key = (!key.is_empty()).then_some(key);
        collector
            .process_value(key, size)
            .with_context(|| format!("Invalid input at line {line_no}"))?;
    }

    Ok(collector)
}

fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
