// src/exec/launch.rs

use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::{Child, Command};
use tracing::{debug, info, warn};

/// A launched external task.
///
/// The gate holds the handle only so it can kill the process on timeout when
/// asked to; it never waits for the exit status as part of its decision.
/// `kill_on_drop` is off, so dropping the handle (the default path) leaves
/// the task running after the gate exits.
#[derive(Debug)]
pub struct ExternalTask {
    cmd: String,
    child: Child,
}

/// Start `cmd_str` via the platform shell, detached from the gate's control
/// flow.
///
/// stdout and stderr are piped and drained to debug logging in background
/// tasks; the task's real diagnostic output is expected in its log file.
pub fn launch(cmd_str: &str) -> Result<ExternalTask> {
    info!(cmd = %cmd_str, "launching external task");

    let mut cmd = if cfg!(windows) {
        let mut c = Command::new("cmd");
        c.arg("/C").arg(cmd_str);
        c
    } else {
        let mut c = Command::new("sh");
        c.arg("-c").arg(cmd_str);
        c
    };

    cmd.stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(false);

    let mut child = cmd
        .spawn()
        .with_context(|| format!("spawning external task '{cmd_str}'"))?;

    if let Some(stdout) = child.stdout.take() {
        spawn_drain("stdout", stdout);
    }
    if let Some(stderr) = child.stderr.take() {
        spawn_drain("stderr", stderr);
    }

    Ok(ExternalTask {
        cmd: cmd_str.to_string(),
        child,
    })
}

impl ExternalTask {
    /// OS process id, if the process is still attached.
    pub fn id(&self) -> Option<u32> {
        self.child.id()
    }

    /// Kill the task. Used only for the opt-in kill-on-timeout path.
    pub async fn kill(&mut self) -> Result<()> {
        warn!(cmd = %self.cmd, pid = ?self.child.id(), "killing external task after timeout");
        self.child
            .kill()
            .await
            .with_context(|| format!("killing external task '{}'", self.cmd))
    }

    /// Log whether the task has already exited, without blocking on it.
    ///
    /// Called once after the gate's decision, purely for diagnostics: a task
    /// that exited non-zero and a task still running both look the same to
    /// the gate itself.
    pub fn log_status(&mut self) {
        match self.child.try_wait() {
            Ok(Some(status)) => {
                info!(cmd = %self.cmd, code = ?status.code(), "external task already exited");
            }
            Ok(None) => {
                info!(cmd = %self.cmd, pid = ?self.child.id(), "external task still running, left detached");
            }
            Err(e) => {
                warn!(cmd = %self.cmd, error = %e, "could not query external task status");
            }
        }
    }
}

fn spawn_drain(stream: &'static str, reader: impl AsyncRead + Unpin + Send + 'static) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(reader).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            debug!(stream, "{}", line);
        }
    });
}
