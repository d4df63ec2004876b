// src/gate/state.rs

use std::fmt;

/// Terminal result of a gate run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// The completion signal was observed within the budget.
    Success,
    /// The budget ran out before the signal appeared.
    ///
    /// A crashed task, a hung task and a merely slow task all land here; the
    /// emitted log file is the operator's way to tell them apart.
    TimedOut,
}

impl fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateOutcome::Success => write!(f, "success"),
            GateOutcome::TimedOut => write!(f, "timed out"),
        }
    }
}

/// Gate state machine.
///
/// `Waiting` carries the remaining tick budget; `Done` is terminal. The
/// budget is only ever decremented, never reset or extended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    Waiting { remaining: u64 },
    Done(GateOutcome),
}

impl GateState {
    /// Initial state with the full tick budget.
    pub fn new(budget: u64) -> Self {
        GateState::Waiting { remaining: budget }
    }

    /// Advance by one observation of the completion signal.
    ///
    /// - signal present: `Done(Success)`, regardless of remaining budget
    ///   (a pre-existing marker short-circuits at tick 0)
    /// - signal absent, budget exhausted: `Done(TimedOut)`
    /// - signal absent otherwise: stay `Waiting` with one tick consumed
    /// - `Done` is terminal: further observations change nothing
    pub fn observe(self, signal_present: bool) -> Self {
        match self {
            GateState::Waiting { .. } if signal_present => GateState::Done(GateOutcome::Success),
            GateState::Waiting { remaining: 0 } => GateState::Done(GateOutcome::TimedOut),
            GateState::Waiting { remaining } => GateState::Waiting {
                remaining: remaining - 1,
            },
            done @ GateState::Done(_) => done,
        }
    }

    /// The outcome, if the gate has finished.
    pub fn outcome(&self) -> Option<GateOutcome> {
        match self {
            GateState::Done(outcome) => Some(*outcome),
            GateState::Waiting { .. } => None,
        }
    }
}
