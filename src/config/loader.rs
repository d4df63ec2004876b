// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::model::ConfigFile;
use crate::config::validate::validate_config;

/// Deserialize a config file without semantic checks.
///
/// Most callers want [`load_and_validate`] or [`discover`] instead.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading config file at {:?}", path))?;
    toml::from_str(&contents).with_context(|| format!("parsing TOML config from {:?}", path))
}

/// Load a configuration file from path and run basic validation.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let config = load_from_path(&path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Resolve the config source for a run.
///
/// An explicitly given path must exist; the default `Waitmark.toml` is only
/// loaded when it is actually present, so a pure-flags invocation needs no
/// file at all.
pub fn discover(explicit: Option<&str>) -> Result<ConfigFile> {
    match explicit {
        Some(path) => load_and_validate(Path::new(path)),
        None => {
            let path = default_config_path();
            if path.is_file() {
                load_and_validate(&path)
            } else {
                Ok(ConfigFile::default())
            }
        }
    }
}

/// Default config path: `Waitmark.toml` in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Waitmark.toml")
}
