//! Small supporting helpers.

use std::sync::LazyLock;

use regex::Regex;

static UNSIGNED_INT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?([0-9]+)$").unwrap());

/// Appends `value` to `vec` unless an equal element is already present.
///
/// First-occurrence order is preserved; duplicates are a no-op.
pub fn push_back_uniquely<T: PartialEq>(vec: &mut Vec<T>, value: T) {
    if !vec.contains(&value) {
        vec.push(value);
    }
}

/// Coerces a string to an integer.
///
/// Accepts an optional leading `+` followed by decimal digits. Empty,
/// non-matching, and overflowing input all yield 0; this never fails
/// observably.
pub fn string_to_int(value: &str) -> i32 {
    UNSIGNED_INT_RE
        .captures(value)
        .and_then(|caps| caps[1].parse::<i32>().ok())
        .unwrap_or(0)
}
