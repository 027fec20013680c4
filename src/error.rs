//! Error types for crux-toolcheck.
//!
//! A check never fails with an `Err`; these types describe *why* a tool was
//! unusable so the cause can be embedded in a `CheckResult::Failure`.

use std::io;
use std::process::ExitStatus;
use thiserror::Error;

/// Why a probed command could not be used.
#[derive(Debug, Error)]
pub enum FailureCause {
    /// The process could not be started at all (missing file, not
    /// executable, not found in the search path).
    #[error("failed to start process: {0}")]
    Spawn(#[source] io::Error),

    /// The process started but did not exit successfully.
    #[error("{}", exit_description(.status, .stderr))]
    Exit {
        /// Exit status, including termination by signal
        status: ExitStatus,
        /// Trimmed standard error captured from the child
        stderr: String,
    },
}

impl FailureCause {
    /// True when the executable could not be located.
    pub fn is_not_found(&self) -> bool {
        matches!(self, FailureCause::Spawn(e) if e.kind() == io::ErrorKind::NotFound)
    }
}

fn exit_description(status: &ExitStatus, stderr: &str) -> String {
    if stderr.is_empty() {
        format!("process exited unsuccessfully ({})", status)
    } else {
        format!("process exited unsuccessfully ({})\n{}", status, stderr)
    }
}

/// The single error kind surfaced to hosts: the tool is not usable.
///
/// Produced by [`crate::CheckResult::into_result`]. The message is the same
/// human-readable diagnostic carried by `CheckResult::Failure`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct CommandUnavailable {
    pub message: String,
}
