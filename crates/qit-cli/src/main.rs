//! Qit Command-Line Interface
//!
//! Interactive shell over a network of simulated quantum computers.
//!
//! ```text
//! $ qit --seed 7
//! qit> create alice 2
//! qit> entangle alice 0 1
//! qit> measure alice 0
//! ```

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io;

use anyhow::Context;
use clap::Parser;
use console::style;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use qit_cli::args::log_filter;
use qit_cli::shell::print_welcome;
use qit_cli::{Cli, Config, Shell, demo};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{} {:#}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.seed, cli.max_qubits);
    config.validate()?;

    // Setup logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_filter(
            cli.verbose,
            &config.logging.level,
        )))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    debug!(?config, "Configuration loaded");

    let mut shell = Shell::new(config);
    let mut out = io::stdout().lock();

    if cli.demo {
        demo::run(&mut shell, &mut out)?;
    } else {
        print_welcome(&mut out)?;
        shell.run(io::stdin().lock(), &mut out)?;
    }

    Ok(())
}
