// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

use crate::types::DependencyFormat;

/// Command-line arguments for `sprintgraph`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "sprintgraph",
    version,
    about = "Flag task dependencies that cross sprint boundaries the wrong way.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// If omitted, `Sprintgraph.toml` in the current working directory is
    /// used when it exists; otherwise built-in defaults apply. An explicitly
    /// given path that does not exist is an error.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Path to the sprint-assignment CSV (overrides `[inputs].sprints`).
    #[arg(long, value_name = "PATH")]
    pub sprints: Option<String>,

    /// Path to the dependency CSV (overrides `[inputs].dependencies`).
    #[arg(long, value_name = "PATH")]
    pub deps: Option<String>,

    /// Dependency CSV layout (overrides `[inputs].format`).
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<DependencyFormat>,

    /// Where to write the rendered SVG (overrides `[render].output`).
    #[arg(long, value_name = "PATH")]
    pub output: Option<String>,

    /// Print the violation report only, skip rendering the figure.
    #[arg(long)]
    pub report_only: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SPRINTGRAPH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
