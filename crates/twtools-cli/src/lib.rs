//! Shared plumbing for the twtools binaries
//!
//! Logging goes to stderr so that generated identifiers on stdout stay
//! pipeable. `RUST_LOG` overrides the level chosen with `-v`.

use clap::Args;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

/// Verbosity flag shared by every binary
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct Verbosity {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl Verbosity {
    pub fn level(self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

/// Install the global tracing subscriber
pub fn init_logging(verbosity: Verbosity) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(verbosity.level().into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))
}

/// Result label printed next to each checked value
pub fn verdict(valid: bool) -> &'static str {
    if valid { "OK" } else { "NG" }
}
