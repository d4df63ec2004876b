use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use waitmark::cli::CliArgs;
use waitmark::config::settings::{DEFAULT_TICK_INTERVAL, DEFAULT_TICKS};
use waitmark::config::{ConfigFile, from_sources, load_and_validate, validate_config};
use waitmark::gate::tick::parse_tick_interval;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn gate_toml_drives_settings() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("testdata/gate.toml"))?;

    assert_eq!(cfg.gate.marker.as_deref(), Some("tests_succeeded.log"));
    assert_eq!(cfg.gate.log.as_deref(), Some("unit_test_output.log"));
    assert_eq!(cfg.gate.ticks, Some(1200));
    assert_eq!(cfg.gate.tick_interval.as_deref(), Some("1s"));
    assert_eq!(cfg.task.cmd.as_deref(), Some("python run_tests.py"));
    assert!(cfg.task.reset_marker);
    assert!(!cfg.task.kill_on_timeout);

    let settings = from_sources(&CliArgs::default(), &cfg)?;
    assert_eq!(settings.marker, PathBuf::from("tests_succeeded.log"));
    assert_eq!(settings.ticks, 1200);
    assert_eq!(settings.tick_interval, Duration::from_secs(1));
    assert!(settings.reset_marker);
    Ok(())
}

#[test]
fn cli_flags_override_file_values() -> TestResult {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let cfg = load_and_validate(manifest.join("testdata/gate.toml"))?;

    let args = CliArgs {
        marker: Some("other.marker".to_string()),
        ticks: Some(7),
        tick_interval: Some("250ms".to_string()),
        cmd: Some("true".to_string()),
        ..Default::default()
    };

    let settings = from_sources(&args, &cfg)?;
    assert_eq!(settings.marker, PathBuf::from("other.marker"));
    // Not overridden: falls through to the file.
    assert_eq!(settings.log, PathBuf::from("unit_test_output.log"));
    assert_eq!(settings.ticks, 7);
    assert_eq!(settings.tick_interval, Duration::from_millis(250));
    assert_eq!(settings.cmd.as_deref(), Some("true"));
    Ok(())
}

#[test]
fn defaults_apply_when_neither_source_sets_them() -> TestResult {
    let args = CliArgs {
        marker: Some("m".to_string()),
        log_file: Some("l".to_string()),
        ..Default::default()
    };

    let settings = from_sources(&args, &ConfigFile::default())?;
    assert_eq!(settings.ticks, DEFAULT_TICKS);
    assert_eq!(settings.tick_interval, DEFAULT_TICK_INTERVAL);
    assert!(settings.cmd.is_none());
    assert!(!settings.reset_marker);
    assert!(!settings.kill_on_timeout);
    Ok(())
}

#[test]
fn missing_marker_or_log_is_an_error() {
    let args = CliArgs {
        log_file: Some("l".to_string()),
        ..Default::default()
    };
    assert!(from_sources(&args, &ConfigFile::default()).is_err());

    let args = CliArgs {
        marker: Some("m".to_string()),
        ..Default::default()
    };
    assert!(from_sources(&args, &ConfigFile::default()).is_err());
}

#[test]
fn zero_ticks_are_rejected() -> TestResult {
    let cfg: ConfigFile = toml::from_str(
        r#"
        [gate]
        marker = "m"
        log = "l"
        ticks = 0
        "#,
    )?;
    assert!(validate_config(&cfg).is_err());
    Ok(())
}

#[test]
fn bad_tick_interval_is_rejected() -> TestResult {
    let cfg: ConfigFile = toml::from_str(
        r#"
        [gate]
        tick_interval = "soon"
        "#,
    )?;
    assert!(validate_config(&cfg).is_err());

    let cfg: ConfigFile = toml::from_str(
        r#"
        [gate]
        tick_interval = "0s"
        "#,
    )?;
    assert!(validate_config(&cfg).is_err());
    Ok(())
}

#[test]
fn empty_paths_are_rejected() -> TestResult {
    let cfg: ConfigFile = toml::from_str(
        r#"
        [gate]
        marker = "  "
        "#,
    )?;
    assert!(validate_config(&cfg).is_err());
    Ok(())
}

#[test]
fn tick_interval_formats() {
    assert_eq!(parse_tick_interval("1s"), Ok(Duration::from_secs(1)));
    assert_eq!(parse_tick_interval("250ms"), Ok(Duration::from_millis(250)));
    assert_eq!(parse_tick_interval("2m"), Ok(Duration::from_secs(120)));
    assert_eq!(parse_tick_interval("1h"), Ok(Duration::from_secs(3600)));
    assert!(parse_tick_interval("").is_err());
    assert!(parse_tick_interval("10").is_err());
    assert!(parse_tick_interval("10d").is_err());
    // Parseable digits whose seconds value would overflow a u64.
    assert!(parse_tick_interval("9999999999999999999h").is_err());
}
