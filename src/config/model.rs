// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [gate]
/// marker = "tests_succeeded.log"
/// log = "unit_test_output.log"
/// ticks = 1200
/// tick_interval = "1s"
///
/// [task]
/// cmd = "python run_tests.py"
/// reset_marker = true
/// ```
///
/// Both sections are optional; anything missing can instead be supplied on
/// the command line (see `config::settings`).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Polling contract from `[gate]`.
    #[serde(default)]
    pub gate: GateSection,

    /// External task from `[task]`.
    #[serde(default)]
    pub task: TaskSection,
}

/// `[gate]` section: the filesystem contract and the wait budget.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GateSection {
    /// Marker file whose existence signals success.
    #[serde(default)]
    pub marker: Option<String>,

    /// Log file produced by the external task.
    #[serde(default)]
    pub log: Option<String>,

    /// Number of poll ticks to wait before giving up.
    #[serde(default)]
    pub ticks: Option<u64>,

    /// Duration of one tick, e.g. `"1s"` or `"250ms"`.
    #[serde(default)]
    pub tick_interval: Option<String>,
}

/// `[task]` section: how (and whether) to launch the external task.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskSection {
    /// Shell command to launch before polling. If absent, the gate only
    /// polls.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Remove a stale marker before launching / polling.
    #[serde(default)]
    pub reset_marker: bool,

    /// Kill the launched process when the budget expires.
    #[serde(default)]
    pub kill_on_timeout: bool,
}
