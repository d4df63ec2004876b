// src/gate/poll.rs

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info};

use crate::gate::signal::CompletionSignal;
use crate::gate::state::{GateOutcome, GateState};

/// Wait for `signal` to complete, checking once per tick.
///
/// The signal is checked before the first sleep, so a condition that already
/// holds returns immediately without consuming any budget. With a budget of
/// `n` and a signal that never completes, the loop performs `n + 1` checks
/// and `n` sleeps, then reports [`GateOutcome::TimedOut`]. The loop never
/// busy-spins; it blocks on `tokio::time::sleep` between checks.
///
/// The external task is not touched here: whatever produces the signal keeps
/// running (or stays crashed) regardless of the outcome.
pub async fn wait_for(
    signal: &impl CompletionSignal,
    budget: u64,
    tick_interval: Duration,
) -> GateOutcome {
    let mut state = GateState::new(budget);

    loop {
        state = state.observe(signal.is_complete());
        match state {
            GateState::Done(outcome) => {
                info!(%outcome, "gate finished");
                return outcome;
            }
            GateState::Waiting { remaining } => {
                debug!(remaining, "completion signal absent, waiting one tick");
                sleep(tick_interval).await;
            }
        }
    }
}
