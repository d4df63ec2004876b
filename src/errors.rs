// src/errors.rs

//! Crate-wide error aliases.
//!
//! The gate has exactly one domain-level failure (timeout), which is modelled
//! as a `GateOutcome`, not an error. Everything else (config, spawn, IO) is
//! operational and flows through `anyhow`.

pub use anyhow::{Error, Result};
