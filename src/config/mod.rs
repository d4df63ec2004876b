// src/config/mod.rs

//! Configuration loading and resolution for waitmark.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//! - Validate basic invariants like the tick budget (`validate.rs`).
//! - Merge CLI flags over file values into `GateSettings` (`settings.rs`).

pub mod loader;
pub mod model;
pub mod settings;
pub mod validate;

pub use loader::{discover, load_and_validate, load_from_path};
pub use model::{ConfigFile, GateSection, TaskSection};
pub use settings::{GateSettings, from_sources, resolve_settings};
pub use validate::validate_config;
