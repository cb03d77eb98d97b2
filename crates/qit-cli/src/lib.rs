//! Library half of the `qit` interactive shell.
//!
//! The binary is a thin wrapper: it parses [`Cli`], loads [`Config`], sets
//! up logging and hands stdin/stdout to [`Shell::run`]. Everything else lives
//! here so it can be driven from tests with in-memory readers and writers.

pub mod args;
pub mod command;
pub mod config;
pub mod demo;
pub mod shell;

pub use args::Cli;
pub use command::{Command, CommandError};
pub use config::{Config, ConfigError};
pub use shell::{Flow, Shell, ShellError};
