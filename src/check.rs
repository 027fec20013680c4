//! Availability checks for configured crux-llvm tools.
//!
//! Two ways of locating the tool, one way of running it: both checks build a
//! `Command` and hand it to [`probe::run`], then turn the outcome into a
//! [`CheckResult`] whose failure message tells the user which setting to fix.

use crate::config::{Configuration, ToolKey, PATH_KEY, SETTINGS_NAMESPACE};
use crate::error::{CommandUnavailable, FailureCause};
use crate::{probe, version};
use std::process::Command;

/// Outcome of a single availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// The tool ran; `output` is its captured standard output.
    Success { output: String },
    /// The tool is unusable; `message` explains what to fix and why.
    Failure { message: String },
}

impl CheckResult {
    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success { .. })
    }

    pub fn output(&self) -> Option<&str> {
        match self {
            CheckResult::Success { output } => Some(output),
            CheckResult::Failure { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            CheckResult::Success { .. } => None,
            CheckResult::Failure { message } => Some(message),
        }
    }

    /// Version number reported by the tool, if its output contains one.
    pub fn version(&self) -> Option<&str> {
        self.output().and_then(version::extract_version)
    }

    pub fn into_result(self) -> Result<String, CommandUnavailable> {
        match self {
            CheckResult::Success { output } => Ok(output),
            CheckResult::Failure { message } => Err(CommandUnavailable { message }),
        }
    }

    fn classify(outcome: Result<String, FailureCause>, hint: impl FnOnce() -> String) -> Self {
        match outcome {
            Ok(output) => CheckResult::Success { output },
            Err(cause) => CheckResult::Failure {
                message: format!("{}\n{}", hint(), cause),
            },
        }
    }
}

/// Check that the executable configured for `key` runs.
///
/// The configured value is spawned as-is with `--version`, inheriting this
/// process's environment. A bare name is therefore looked up in the ambient
/// `PATH`.
pub fn check_command(configuration: &Configuration, key: ToolKey) -> CheckResult {
    let command = Command::new(configuration.tool(key));
    CheckResult::classify(probe::run(command), || {
        format!(
            "{} could not be found.  Please set or update \"{}\" correctly in your settings.json.",
            key,
            key.setting_name()
        )
    })
}

/// Check that `command_name` can be found through the configured search path.
///
/// The child gets an empty environment except for `PATH`, which is set to the
/// configuration's search path, so nothing from the ambient environment can
/// make the check pass.
pub fn check_command_via_path(configuration: &Configuration, command_name: &str) -> CheckResult {
    let mut command = Command::new(command_name);
    command.env_clear().env("PATH", configuration.search_path());
    CheckResult::classify(probe::run(command), || {
        format!(
            "{} could not be found.  Please make sure that \"{}.{}\" is a PATH containing {} in your settings.json.",
            command_name, SETTINGS_NAMESPACE, PATH_KEY, command_name
        )
    })
}
