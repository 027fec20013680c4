//! Process probing for crux-toolcheck.
//!
//! Runs a command with the version-query flag and classifies the outcome.

use crate::error::FailureCause;
use std::process::Command;
use tracing::debug;

/// The single argument passed to every probed command.
pub const VERSION_FLAG: &str = "--version";

/// Run `command` with [`VERSION_FLAG`] and wait for it to finish.
///
/// Returns the child's standard output, decoded lossily, when it exits
/// successfully. Blocks until the child exits; there is no timeout.
pub fn run(mut command: Command) -> Result<String, FailureCause> {
    command.arg(VERSION_FLAG);
    let program = command.get_program().to_string_lossy().into_owned();
    debug!(program = %program, "probing command");

    let output = match command.output() {
        Ok(output) => output,
        Err(e) => {
            debug!(program = %program, error = %e, "failed to start command");
            return Err(FailureCause::Spawn(e));
        }
    };

    if !output.status.success() {
        debug!(program = %program, status = %output.status, "command exited unsuccessfully");
        return Err(FailureCause::Exit {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    debug!(program = %program, "command available");
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
