//! Solves one polynomial per line of a text file.
//!
//! Each line holds comma-separated coefficients, highest degree first, as
//! integers or `n/d` fractions. Malformed lines are logged and skipped.
//!
//! ```text
//! cargo run -p fractus --example solve_file -- input.txt -o output.txt
//! RUST_LOG=fractus_poly=debug cargo run -p fractus --example solve_file -- input.txt
//! ```

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fractus::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Find the roots of polynomials listed in a file")]
struct Args {
    /// Input file, one comma-separated coefficient list per line.
    input: PathBuf,

    /// Output file; defaults to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Report each rational root once.
    #[arg(long)]
    dedup: bool,

    /// Evaluate rational root candidates in parallel.
    #[arg(long)]
    parallel: bool,
}

fn render_list(values: &[Rational]) -> String {
    let items: Vec<String> = values.iter().map(ToString::to_string).collect();
    format!("[{}]", items.join(", "))
}

fn describe(coeffs: &[Rational]) -> (String, &'static str) {
    match coeffs {
        [a, b] => (format!("Linear equation: {a}*x + {b} = 0"), "Roots"),
        [a, b, c] => (format!("Quadratic equation: {a}*x^2 + {b}*x + {c} = 0"), "Roots"),
        _ => (
            "Polynomial degree > 2, finding rational roots".to_string(),
            "Rational roots",
        ),
    }
}

fn report(out: &mut impl Write, coeffs: &[Rational], search: &RootSearch) -> Result<()> {
    writeln!(out, "Coefficients: {}", render_list(coeffs))?;
    let result = match solve_with(coeffs, search) {
        Ok(result) => result,
        Err(err) => {
            writeln!(out, "Error: {err}")?;
            return Ok(());
        }
    };

    match result {
        RootResult::NoEquation => writeln!(out, "Degree is 0, no equation to solve")?,
        RootResult::NoRealRoots => {
            let (heading, label) = describe(coeffs);
            writeln!(out, "{heading}")?;
            writeln!(out, "{label}: No real roots")?;
        }
        RootResult::Roots(roots) => {
            let (heading, label) = describe(coeffs);
            writeln!(out, "{heading}")?;
            writeln!(out, "{label}: {}", render_list(&roots))?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let search = RootSearch {
        deduplicate: args.dedup,
        parallel: args.parallel,
        ..RootSearch::default()
    };

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(
            fs::File::create(path).with_context(|| format!("creating {}", path.display()))?,
        ),
        None => Box::new(io::stdout().lock()),
    };

    let mut solved = 0usize;
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let parsed = line
            .split(',')
            .map(str::parse::<Rational>)
            .collect::<Result<Vec<_>, _>>();
        let coeffs = match parsed {
            Ok(coeffs) => coeffs,
            Err(err) => {
                warn!(line = lineno + 1, %err, "skipping malformed line");
                continue;
            }
        };
        report(&mut out, &coeffs, &search)?;
        writeln!(out)?;
        solved += 1;
    }

    out.flush()?;
    info!(solved, "done");
    Ok(())
}
