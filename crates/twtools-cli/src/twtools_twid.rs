//! Taiwan national ID (TWID) CLI
//!
//! Usage:
//!   twtools_twid generate [--gender 1|2] [--letter X] [--count N]
//!   twtools_twid check <ID>...
//!
//! Example: twtools_twid generate --gender 2 --letter A
//!
//! Generated IDs are for testing only.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use twtools_checksum::{
    Gender, RegionLetter, TwidOptions, clamp_batch_count, generate_twid, is_valid_twid,
};
use twtools_cli::{Verbosity, init_logging, verdict};

#[derive(Debug, Parser)]
#[command(name = "twtools_twid", version)]
#[command(about = "Generate and check Taiwan national ID numbers")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate random valid IDs (test data only)
    Generate {
        /// Gender digit (1 = male, 2 = female); random if omitted
        #[arg(short, long, value_parser = parse_gender)]
        gender: Option<Gender>,

        /// Region letter; random if omitted
        #[arg(short, long, value_parser = parse_letter)]
        letter: Option<RegionLetter>,

        /// Number of IDs (clamped to 1-1000, fractions are floored)
        #[arg(short = 'n', long, default_value_t = 1.0, allow_hyphen_values = true)]
        count: f64,
    },
    /// Check IDs (each input is trimmed and uppercased first)
    Check {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn parse_gender(s: &str) -> Result<Gender, String> {
    let digit: u8 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid gender '{}'", s))?;
    Gender::try_from(digit).map_err(|e| e.to_string())
}

fn parse_letter(s: &str) -> Result<RegionLetter, String> {
    let mut chars = s.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => {
            RegionLetter::try_from(c.to_ascii_uppercase()).map_err(|e| e.to_string())
        }
        _ => Err(format!("expected a single letter, got '{}'", s)),
    }
}

fn run(command: Command) -> Result<ExitCode> {
    let mut out = io::stdout().lock();

    match command {
        Command::Generate {
            gender,
            letter,
            count,
        } => {
            let options = TwidOptions { gender, letter };
            let n = clamp_batch_count(count);
            info!(?options, n, "generating TWIDs");
            for _ in 0..n {
                writeln!(out, "{}", generate_twid(options))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { ids } => {
            let mut all_valid = true;
            for raw in &ids {
                let id = raw.trim().to_uppercase();
                let valid = is_valid_twid(&id);
                all_valid &= valid;
                writeln!(out, "{}\t{}", id, verdict(valid))?;
            }
            Ok(if all_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
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
