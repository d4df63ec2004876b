// src/exec/mod.rs

//! External task launching.
//!
//! The gate starts the external command with `tokio::process::Command` and
//! then deliberately stops caring about it: the only feedback channel is the
//! marker file, so the child is detached rather than awaited. [`launch`]
//! keeps stdout/stderr drained so OS pipe buffers never fill.

pub mod launch;

pub use launch::{ExternalTask, launch};
