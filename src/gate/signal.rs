// src/gate/signal.rs

//! The completion-signal seam.
//!
//! The poll loop only needs a yes/no answer per tick, so the check is a
//! trait: the production implementation is marker-file existence, and tests
//! (or future callers) can substitute any other condition without touching
//! the state machine.

use std::path::{Path, PathBuf};

/// A condition the gate polls once per tick.
pub trait CompletionSignal {
    /// True once the external task has signalled completion.
    fn is_complete(&self) -> bool;
}

/// Marker-file signal: completion means the file exists.
///
/// Content is irrelevant and never read; the gate never creates, deletes or
/// rewrites the file.
#[derive(Debug, Clone)]
pub struct MarkerFile {
    path: PathBuf,
}

impl MarkerFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CompletionSignal for MarkerFile {
    fn is_complete(&self) -> bool {
        self.path.exists()
    }
}
