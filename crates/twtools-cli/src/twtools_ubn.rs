//! Unified business number (UBN) CLI
//!
//! Usage:
//!   twtools_ubn generate [--count N] [--output <PATH>]
//!   twtools_ubn check <UBN>... | --file <PATH>
//!   twtools_ubn normalize <INPUT>
//!
//! Example: twtools_ubn generate --count 100 --output ubns.txt

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;
use twtools_checksum::infra::number_io::{load_numbers, save_numbers};
use twtools_checksum::{clamp_batch_count, is_valid_ubn, normalize_ubn};
use twtools_cli::{Verbosity, init_logging, verdict};

#[cfg(feature = "parallel")]
use twtools_checksum::generate_ubns_parallel as generate_batch;
#[cfg(not(feature = "parallel"))]
use twtools_checksum::generate_ubns as generate_batch;

#[derive(Debug, Parser)]
#[command(name = "twtools_ubn", version)]
#[command(about = "Generate, check and normalize unified business numbers")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random valid UBNs
    Generate {
        /// Number of UBNs (clamped to 1-1000, fractions are floored)
        #[arg(short = 'n', long, default_value_t = 1.0, allow_hyphen_values = true)]
        count: f64,

        /// Write the batch to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Check UBNs (separators are ignored)
    Check {
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        inputs: Vec<String>,

        /// Read UBNs from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
    /// Print the normalized form (digits only, at most 8)
    Normalize { input: String },
}

fn run(command: Command) -> Result<ExitCode> {
    let mut out = io::stdout().lock();

    match command {
        Command::Generate { count, output } => {
            let n = clamp_batch_count(count);
            let start = Instant::now();
            let batch = generate_batch(n);
            info!(
                n,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "generated UBN batch"
            );

            match output {
                Some(path) => {
                    save_numbers(&path, &batch)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    writeln!(out, "Saved {} UBNs to {}", batch.len(), path.display())?;
                }
                None => {
                    for ubn in &batch {
                        writeln!(out, "{}", ubn)?;
                    }
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { inputs, file } => {
            let inputs = match file {
                Some(path) => load_numbers(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?,
                None => inputs,
            };

            let mut all_valid = true;
            for raw in &inputs {
                let normalized = normalize_ubn(raw);
                let shown = if normalized.is_empty() {
                    raw.trim()
                } else {
                    normalized.as_str()
                };
                let valid = is_valid_ubn(raw);
                all_valid &= valid;
                writeln!(out, "{}\t{}", shown, verdict(valid))?;
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
        Command::Normalize { input } => {
            writeln!(out, "{}", normalize_ubn(&input))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbosity) {
        eprintln!("Warning: {}", e);
    }

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
