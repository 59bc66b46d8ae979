//! Shell-execution result contract.

use serde::{Deserialize, Serialize};

/// Exit code reported when a command could not be launched at all.
///
/// Distinguishable from any exit code a process can actually return.
pub const LAUNCH_FAILURE_CODE: i32 = -1;

/// Captured result of a shell command invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecResult {
    /// Captured standard output, lossily decoded as UTF-8.
    pub stdout: String,
    /// Process exit code, or [`LAUNCH_FAILURE_CODE`] if the command never ran.
    pub exit_code: i32,
}

impl ExecResult {
    /// Result representing a command that failed to launch.
    pub fn launch_failure() -> Self {
        Self {
            stdout: String::new(),
            exit_code: LAUNCH_FAILURE_CODE,
        }
    }

    /// True if the command ran and exited with code zero.
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}
