// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod gate;
pub mod logging;

use std::fs;
use std::io::ErrorKind;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::settings::{GateSettings, resolve_settings};
use crate::gate::{GateOutcome, MarkerFile, emit_log, wait_for};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings resolution (config file + CLI flags)
/// - the optional stale-marker reset
/// - the external task launch (if a command was given)
/// - the bounded poll for the marker file
/// - the log dump, which happens in both outcomes
///
/// The returned [`GateOutcome`] is the gate's verdict; `main` maps it to the
/// process exit code. Operational problems (bad config, spawn failure) come
/// back as `Err` instead.
pub async fn run(args: CliArgs) -> Result<GateOutcome> {
    let settings = resolve_settings(&args)?;

    if args.dry_run {
        print_dry_run(&settings);
        return Ok(GateOutcome::Success);
    }

    // Stale-marker precondition. This belongs to the launcher side: once
    // polling starts, the gate itself never touches the marker.
    if settings.reset_marker {
        remove_stale_marker(&settings)?;
    }

    let mut task = match settings.cmd {
        Some(ref cmd) => Some(exec::launch(cmd)?),
        None => {
            debug!("no command given, polling only");
            None
        }
    };

    let marker = MarkerFile::new(&settings.marker);
    info!(
        marker = ?settings.marker,
        ticks = settings.ticks,
        interval = ?settings.tick_interval,
        "gate waiting for marker"
    );
    let outcome = wait_for(&marker, settings.ticks, settings.tick_interval).await;

    // Diagnostics are emitted in both outcomes, before anything is done to
    // the task.
    emit_log(&settings.log);

    if let Some(ref mut task) = task {
        if outcome == GateOutcome::TimedOut && settings.kill_on_timeout {
            task.kill().await?;
        } else {
            task.log_status();
        }
    }

    Ok(outcome)
}

fn remove_stale_marker(settings: &GateSettings) -> Result<()> {
    match fs::remove_file(&settings.marker) {
        Ok(()) => {
            info!(marker = ?settings.marker, "removed stale marker file");
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e).with_context(|| format!("removing stale marker {:?}", settings.marker)),
    }
}

/// Simple dry-run output: print the resolved settings, execute nothing.
fn print_dry_run(settings: &GateSettings) {
    println!("waitmark dry-run");
    println!("  marker: {:?}", settings.marker);
    println!("  log: {:?}", settings.log);
    println!("  ticks: {}", settings.ticks);
    println!("  tick_interval: {:?}", settings.tick_interval);
    match settings.cmd {
        Some(ref cmd) => println!("  cmd: {cmd}"),
        None => println!("  cmd: (none, polling only)"),
    }
    println!("  reset_marker: {}", settings.reset_marker);
    println!("  kill_on_timeout: {}", settings.kill_on_timeout);

    debug!("dry-run complete (no execution)");
}
