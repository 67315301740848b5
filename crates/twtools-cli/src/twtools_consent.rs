//! Consent code CLI
//!
//! Usage:
//!   twtools_consent generate --prefix <YYYMM> --seq <N> [--letter A-D]
//!   twtools_consent check <CODE>...
//!
//! Example: twtools_consent generate --prefix 11409 --seq 42

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::process::ExitCode;
use twtools_checksum::{format_consent, generate_consent, is_valid_consent};
use twtools_cli::{Verbosity, init_logging, verdict};

#[derive(Debug, Parser)]
#[command(name = "twtools_consent", version)]
#[command(about = "Build and check consent codes")]
#[command(arg_required_else_help = true)]
struct Cli {
    #[command(flatten)]
    verbosity: Verbosity,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a consent code
    Generate {
        /// ROC year and month, 5 digits (e.g. 11409)
        #[arg(short, long)]
        prefix: String,

        /// Serial number (zero-padded to 6 digits)
        #[arg(short, long)]
        seq: u32,

        /// Letter A-D; random if omitted
        #[arg(short, long)]
        letter: Option<char>,
    },
    /// Check consent codes
    Check {
        #[arg(required = true)]
        codes: Vec<String>,
    },
}

fn run(command: Command) -> Result<ExitCode> {
    let mut out = io::stdout().lock();

    match command {
        Command::Generate {
            prefix,
            seq,
            letter,
        } => {
            let code = match letter {
                Some(l) => format_consent(&prefix, l.to_ascii_uppercase(), seq)?,
                None => generate_consent(&prefix, seq)?,
            };
            writeln!(out, "{}", code)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Check { codes } => {
            let mut all_valid = true;
            for raw in &codes {
                let code = raw.trim();
                let valid = is_valid_consent(code);
                all_valid &= valid;
                writeln!(out, "{}\t{}", code, verdict(valid))?;
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
