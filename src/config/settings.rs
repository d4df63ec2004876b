// src/config/settings.rs

//! Resolved gate settings: config file values with CLI flags layered on top.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};

use crate::cli::CliArgs;
use crate::config::loader::discover;
use crate::config::model::ConfigFile;
use crate::gate::tick::parse_tick_interval;

/// Default tick budget: 1200 ticks of one second, i.e. a 20 minute wait.
pub const DEFAULT_TICKS: u64 = 1200;

/// Default tick length.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Fully resolved settings the gate runs with.
///
/// Precedence per field: CLI flag, then config file, then default. `marker`
/// and `log` have no default and must come from one of the two sources.
#[derive(Debug, Clone)]
pub struct GateSettings {
    /// Marker file whose existence signals success.
    pub marker: PathBuf,

    /// Log file emitted to stdout at decision time.
    pub log: PathBuf,

    /// Number of poll ticks before the gate gives up.
    pub ticks: u64,

    /// Length of one poll tick.
    pub tick_interval: Duration,

    /// Optional external task command, run via the platform shell.
    pub cmd: Option<String>,

    /// Remove a stale marker before launching / polling.
    pub reset_marker: bool,

    /// Kill the launched task when the budget expires.
    pub kill_on_timeout: bool,
}

/// Build `GateSettings` from CLI args, loading the config file if present.
///
/// An explicitly passed `--config` path must exist; the default
/// `Waitmark.toml` is only loaded when it is actually there, so a pure-flags
/// invocation needs no file at all.
pub fn resolve_settings(args: &CliArgs) -> Result<GateSettings> {
    let cfg = discover(args.config.as_deref())?;
    from_sources(args, &cfg)
}

/// Merge CLI args over file values. Split out of [`resolve_settings`] so
/// tests can exercise the precedence rules without touching the filesystem.
pub fn from_sources(args: &CliArgs, cfg: &ConfigFile) -> Result<GateSettings> {
    let marker = args
        .marker
        .clone()
        .or_else(|| cfg.gate.marker.clone())
        .ok_or_else(|| anyhow!("no marker file given (use --marker or [gate].marker)"))?;

    let log = args
        .log_file
        .clone()
        .or_else(|| cfg.gate.log.clone())
        .ok_or_else(|| anyhow!("no log file given (use --log-file or [gate].log)"))?;

    let ticks = args.ticks.or(cfg.gate.ticks).unwrap_or(DEFAULT_TICKS);
    if ticks == 0 {
        return Err(anyhow!("tick budget must be >= 1 (got 0)"));
    }

    let tick_interval = match args.tick_interval.as_ref().or(cfg.gate.tick_interval.as_ref()) {
        Some(s) => parse_tick_interval(s)
            .map_err(|e| anyhow!(e))
            .context("invalid tick interval")?,
        None => DEFAULT_TICK_INTERVAL,
    };
    if tick_interval.is_zero() {
        return Err(anyhow!("tick interval must be non-zero"));
    }

    Ok(GateSettings {
        marker: PathBuf::from(marker),
        log: PathBuf::from(log),
        ticks,
        tick_interval,
        cmd: args.cmd.clone().or_else(|| cfg.task.cmd.clone()),
        reset_marker: args.reset_marker || cfg.task.reset_marker,
        kill_on_timeout: args.kill_on_timeout || cfg.task.kill_on_timeout,
    })
}
