//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

/// Qit - interactive quantum computer simulator
#[derive(Debug, Parser)]
#[command(name = "qit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file (defaults to ~/.qit/config.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible measurements
    #[arg(long)]
    pub seed: Option<u64>,

    /// Largest register a computer may allocate
    #[arg(long)]
    pub max_qubits: Option<usize>,

    /// Run the scripted demonstration and exit
    #[arg(long)]
    pub demo: bool,
}

/// Resolve the tracing filter directive.
///
/// Any `-v` flag wins; otherwise the configured level applies.
pub fn log_filter(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
