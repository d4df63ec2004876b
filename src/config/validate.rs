// src/config/validate.rs

use anyhow::{Context, Result, anyhow};

use crate::config::model::ConfigFile;
use crate::gate::tick::parse_tick_interval;

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `ticks`, if given, is at least 1
/// - `tick_interval`, if given, parses and is non-zero
/// - `marker` / `log`, if given, are non-empty strings
///
/// It does **not** require `marker` or `log` to be present: those may still
/// arrive via CLI flags, and `config::settings` enforces that one of the two
/// sources supplied them.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if let Some(ticks) = cfg.gate.ticks
        && ticks == 0
    {
        return Err(anyhow!("[gate].ticks must be >= 1 (got 0)"));
    }

    if let Some(ref interval) = cfg.gate.tick_interval {
        let dur = parse_tick_interval(interval)
            .map_err(|e| anyhow!(e))
            .context("invalid [gate].tick_interval")?;
        if dur.is_zero() {
            return Err(anyhow!("[gate].tick_interval must be non-zero"));
        }
    }

    ensure_non_empty("[gate].marker", cfg.gate.marker.as_deref())?;
    ensure_non_empty("[gate].log", cfg.gate.log.as_deref())?;
    ensure_non_empty("[task].cmd", cfg.task.cmd.as_deref())?;

    Ok(())
}

fn ensure_non_empty(field: &str, value: Option<&str>) -> Result<()> {
    if let Some(s) = value
        && s.trim().is_empty()
    {
        return Err(anyhow!("{field} must not be an empty string"));
    }
    Ok(())
}
