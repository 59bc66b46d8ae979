//! Shell command execution.

use std::process::Command;

use projkit_schema::ExecResult;
use tracing::{debug, warn};

/// Runs `cmd` through the platform shell, capturing stdout.
///
/// Returns the captured text and the process exit code. A command that
/// cannot be launched at all yields [`ExecResult::launch_failure`] rather
/// than an error; a command killed by a signal reports the launch-failure
/// sentinel code as well, since no exit code exists.
pub fn exec_command(cmd: &str) -> ExecResult {
    debug!(cmd, "executing shell command");
    let output = shell_command(cmd).output();
    match output {
        Ok(output) => ExecResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            exit_code: output
                .status
                .code()
                .unwrap_or(projkit_schema::exec::LAUNCH_FAILURE_CODE),
        },
        Err(err) => {
            warn!(cmd, %err, "failed to launch shell command");
            ExecResult::launch_failure()
        }
    }
}

#[cfg(windows)]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", cmd]);
    command
}

#[cfg(not(windows))]
fn shell_command(cmd: &str) -> Command {
    let mut command = Command::new("sh");
    command.args(["-c", cmd]);
    command
}
