// src/gate/mod.rs

//! The completion gate: a bounded wait on an external completion signal.
//!
//! - [`state`] holds the two-state machine (`Waiting` / `Done`) as pure
//!   transitions.
//! - [`signal`] defines the `CompletionSignal` seam and the marker-file
//!   implementation.
//! - [`poll`] drives the state machine with real sleeps.
//! - [`tick`] parses tick-interval strings like `"1s"`.
//! - [`report`] emits the external task's log file at decision time.

pub mod poll;
pub mod report;
pub mod signal;
pub mod state;
pub mod tick;

pub use poll::wait_for;
pub use report::emit_log;
pub use signal::{CompletionSignal, MarkerFile};
pub use state::{GateOutcome, GateState};
