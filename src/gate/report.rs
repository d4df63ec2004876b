// src/gate/report.rs

use std::fs;
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use tracing::warn;

/// Emit the external task's log file to stdout.
///
/// This runs in both outcomes: the log is the operator's only way to tell a
/// crash from a hang from a slow run. A missing or unreadable log must not
/// turn into a gate failure, so errors are reported as a notice and swallowed.
/// The file is read once at decision time and never mutated.
pub fn emit_log(log_path: &Path) {
    match fs::read_to_string(log_path) {
        Ok(contents) => {
            let mut stdout = io::stdout().lock();
            if let Err(e) = stdout
                .write_all(contents.as_bytes())
                .and_then(|_| stdout.flush())
            {
                warn!(path = ?log_path, error = %e, "failed writing log contents to stdout");
            }
        }
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = ?log_path, "log file not found at decision time");
            println!("(log file {:?} unavailable: not found)", log_path);
        }
        Err(e) => {
            warn!(path = ?log_path, error = %e, "failed reading log file");
            println!("(log file {:?} unavailable: {})", log_path, e);
        }
    }
}
