// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! Everything here can also come from the TOML config file; flags win over
//! file values (see `config::settings`).

use clap::{Parser, ValueEnum};

/// Command-line arguments for `waitmark`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "waitmark",
    version,
    about = "Launch an external task, wait for a marker file, dump its log.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Waitmark.toml` in the current working directory. The default
    /// is only loaded when the file exists; an explicitly given path must
    /// exist.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Marker file whose existence signals success of the external task.
    #[arg(long, value_name = "PATH")]
    pub marker: Option<String>,

    /// Log file written by the external task, emitted to stdout at the end.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,

    /// Maximum number of poll ticks to wait for the marker.
    #[arg(long, value_name = "N")]
    pub ticks: Option<u64>,

    /// Length of one poll tick (e.g. "1s", "250ms").
    #[arg(long, value_name = "DUR")]
    pub tick_interval: Option<String>,

    /// Command to launch before polling (run via the platform shell).
    ///
    /// If omitted, no process is started and the gate only polls; use this
    /// when the external task is launched by an earlier pipeline step.
    #[arg(long, value_name = "CMD")]
    pub cmd: Option<String>,

    /// Remove a stale marker file before launching / polling.
    ///
    /// Without this, a marker left over from a previous run makes the gate
    /// report success immediately.
    #[arg(long)]
    pub reset_marker: bool,

    /// Kill the launched task if the tick budget expires.
    ///
    /// By default the task is left running and only the gate exits.
    #[arg(long)]
    pub kill_on_timeout: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `WAITMARK_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the resolved gate settings, but don't launch or poll anything.
    #[arg(long)]
    pub dry_run: bool,
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
