//! Reports the maximum, the maximum by absolute value and the mean of a list
//! of rationals, one per line. Blank lines are skipped.
//!
//! ```text
//! cargo run -p fractus --example list_stats -- numbers.txt
//! ```

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fractus::integers::stats::{max, max_by_abs, mean, parse_lines};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Summarize a list of rational numbers")]
struct Args {
    /// Input file, one integer or `n/d` fraction per line.
    input: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let values =
        parse_lines(&text).with_context(|| format!("parsing {}", args.input.display()))?;
    info!(count = values.len(), "read values");

    let (Some(largest), Some(largest_abs), Some(average)) =
        (max(&values), max_by_abs(&values), mean(&values))
    else {
        warn!(path = %args.input.display(), "no values to summarize");
        return Ok(());
    };

    println!("Maximum: {largest}");
    println!("Maximum by absolute value: {largest_abs}");
    println!("Mean: {average} (~{})", average.to_f64());
    Ok(())
}
