use std::io::{self, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod utils;

#[derive(Parser)]
#[command(name = "bitbloom-cmd")]
#[command(about = "Command-line utility for building and querying bitbloom filters")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v for info, -vv for debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the MurmurHash2 of a key as a 64-bit integer
    Hash {
        /// Hash seed (only the low 32 bits are used)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        seed: i64,

        /// Key to hash
        key: String,
    },

    /// Build a filter blob from newline-separated keys
    Build {
        /// Input file with one key per line, or '-' for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        /// Output file for the raw filter blob
        #[arg(short, long)]
        output: String,

        /// Filter size in bytes (defaults to 1024)
        #[arg(long, allow_negative_numbers = true)]
        size: Option<i64>,
    },

    /// Test keys against a filter blob
    Contains {
        /// Filter blob produced by `build`
        #[arg(short, long)]
        filter: String,

        /// Keys to test (can be specified multiple times)
        #[arg(required = true)]
        key: Vec<String>,
    },

    /// Display summary information about a filter blob
    Inspect {
        /// Filter blob produced by `build`
        #[arg(short, long)]
        filter: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init()
        .ok();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Hash { seed, key } => commands::hash::run(&key, seed, &mut out)?,
        Commands::Build {
            input,
            output,
            size,
        } => commands::build::run(&input, &output, size, &mut out)?,
        Commands::Contains { filter, key } => commands::contains::run(&filter, &key, &mut out)?,
        Commands::Inspect { filter } => commands::inspect::run(&filter, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
