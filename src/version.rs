//! Version string extraction for crux-toolcheck.
//!
//! Pulls a display version out of `--version` output. Purely informational:
//! a check's classification never depends on it.

use regex::Regex;
use std::sync::LazyLock;

// A dotted number with at least major.minor, e.g. `18.1.3` or `0.9`.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+(?:\.\d+)+)").expect("version regex is valid"));

/// Find the first dotted version number in `output`.
///
/// Examples of what tools print and what is returned:
/// - `clang version 18.1.3 (Fedora 18.1.3-1)` gives `18.1.3`
/// - `crux-llvm 0.9` gives `0.9`
/// - `LLVM (http://llvm.org/):\n  LLVM version 14.0.0` gives `14.0.0`
pub fn extract_version(output: &str) -> Option<&str> {
    VERSION_RE
        .captures(output)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
}
