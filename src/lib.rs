//! Availability checks for the external tools used by crux-llvm.
//!
//! A host hands over the user's [`Configuration`] and asks whether a tool is
//! usable. Each check runs the tool once with `--version` and reports a
//! [`CheckResult`]:
//!
//! - [`check_command`] runs the executable configured for a [`ToolKey`].
//! - [`check_command_via_path`] runs a bare command name, resolved only
//!   through the configured search path.
//!
//! Checks never return errors; an unusable tool is a
//! [`CheckResult::Failure`] carrying a message that names the setting to fix.

pub mod check;
pub mod config;
pub mod error;
pub mod probe;
pub mod version;

pub use check::{check_command, check_command_via_path, CheckResult};
pub use config::{Configuration, ToolKey, PATH_KEY, SETTINGS_NAMESPACE};
pub use error::{CommandUnavailable, FailureCause};
