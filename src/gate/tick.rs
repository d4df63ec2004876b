// src/gate/tick.rs

use std::time::Duration;

/// Parse a tick-interval string like `"1s"`, `"250ms"`, `"1m"`, `"2h"`.
///
/// The format is a run of digits followed by a unit suffix. Values that would
/// overflow a `u64` of seconds are rejected rather than wrapped.
pub fn parse_tick_interval(s: &str) -> Result<Duration, String> {
    let s = s.trim();

    let split = s
        .find(|c: char| !c.is_ascii_digit())
        .ok_or_else(|| format!("duration '{s}' is missing a unit suffix (ms, s, m, h)"))?;
    let (digits, unit) = s.split_at(split);

    let value: u64 = digits
        .parse()
        .map_err(|e| format!("invalid duration number '{digits}': {e}"))?;

    let secs_per_unit = match unit.trim().to_ascii_lowercase().as_str() {
        "ms" => return Ok(Duration::from_millis(value)),
        "s" => 1,
        "m" => 60,
        "h" => 60 * 60,
        other => return Err(format!("unsupported duration unit '{other}'; expected ms, s, m, or h")),
    };

    value
        .checked_mul(secs_per_unit)
        .map(Duration::from_secs)
        .ok_or_else(|| format!("duration '{s}' overflows"))
}
