//! Context entry parsing.
//!
//! A context entry names a project plus optional build and target variants:
//! `project[.build][+target]`. The `.` and `+` separators may appear in
//! either order or be omitted independently, so each part is extracted from
//! the full original string with its own pair of mutually exclusive
//! patterns -- extraction is non-destructive and order-independent.

use std::sync::LazyLock;

use projkit_schema::ContextName;
use regex::Regex;

// Each rule has two alternatives with one capture group apiece; at most one
// alternative can match a given input.
static PROJECT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)[.+].*$|^(.*)$").unwrap());
static BUILD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\.(.*)\+.*$|^.*\.(.*).*$").unwrap());
static TARGET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^.*\+(.*)\..*$|^.*\+(.*).*$").unwrap());

fn extract(re: &Regex, entry: &str) -> String {
    re.captures(entry)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Splits a context entry into its project, build-type, and target-type
/// parts.
///
/// - project: everything before the first `.` or `+`, or the whole string
/// - build: the text after `.` (up to a following `+`, if any)
/// - target: the text after `+` (up to a following `.`, if any)
///
/// A part whose separator is absent comes back empty; the input itself is
/// never rejected.
pub fn parse_context_entry(entry: &str) -> ContextName {
    ContextName {
        project: extract(&PROJECT_RE, entry),
        build: extract(&BUILD_RE, entry),
        target: extract(&TARGET_RE, entry),
    }
}
