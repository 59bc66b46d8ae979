//! Compiler specifier expansion, compatibility, and intersection.
//!
//! A compiler specifier is `name[@[>=]version]` in one of three forms:
//!
//! - `gcc` -- any version
//! - `gcc@11.2.0` -- exactly that version
//! - `gcc@>=11.2.0` -- that version or newer
//!
//! The algebra below is what the build-graph resolver leans on when merging
//! the compiler requirements of many projects: pairwise intersection must
//! stay consistent however many times it is applied, so an absent bound is
//! always widened to the other side's bound and the lowest-version sentinel
//! keeps "any version" distinguishable from a real minimum.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Sentinel minimum representing "no lower bound".
pub const ANY_VERSION: &str = "0.0.0";

/// A compiler specifier expanded into name and version bounds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompilerRange {
    /// Compiler name; empty when the specifier had no name.
    pub name: String,
    /// Inclusive minimum version; [`ANY_VERSION`] when unconstrained.
    pub min: String,
    /// Inclusive maximum version; `None` when unconstrained.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Total-order comparison over version strings.
///
/// The algebra treats this as an injected capability: it only requires that
/// `compare` is a total order over the version strings it will see.
pub trait VersionCompare {
    /// Returns `Less`/`Equal`/`Greater` for `a` versus `b`.
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> VersionCompare for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Default comparator: semver precedence where both sides parse as semver,
/// otherwise numeric dotted-segment comparison with missing segments as 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVersionCmp;

impl VersionCompare for DefaultVersionCmp {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (semver::Version::parse(a), semver::Version::parse(b)) {
            (Ok(x), Ok(y)) => x.cmp(&y),
            _ => numeric_segment_cmp(a, b),
        }
    }
}

/// Numeric dotted-segment comparison (e.g. `6.16` < `10.2.0`), used when a
/// version string is not valid semver. Non-numeric segments count as 0 and
/// missing trailing segments count as 0, so `10.2` equals `10.2.0`.
fn numeric_segment_cmp(a: &str, b: &str) -> Ordering {
    let parse = |v: &str| -> Vec<u64> {
        v.split('.')
            .map(|s| s.parse::<u64>().unwrap_or(0))
            .collect()
    };
    let a_parts = parse(a);
    let b_parts = parse(b);
    for i in 0..a_parts.len().max(b_parts.len()) {
        let av = a_parts.get(i).copied().unwrap_or(0);
        let bv = b_parts.get(i).copied().unwrap_or(0);
        match av.cmp(&bv) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
    }
    Ordering::Equal
}

/// Expands a compiler specifier into its name and version bounds.
///
/// - no version clause: `min` is [`ANY_VERSION`], `max` unconstrained
/// - `>=v` clause: `min` is `v`, `max` unconstrained
/// - plain `v` clause: `min` and `max` are both `v`
pub fn expand_compiler(specifier: &str) -> CompilerRange {
    let (name, clause) = specifier.split_once('@').unwrap_or((specifier, ""));
    let (min, max) = if clause.is_empty() {
        (ANY_VERSION.to_string(), None)
    } else if let Some(min) = clause.strip_prefix(">=") {
        (min.to_string(), None)
    } else {
        (clause.to_string(), Some(clause.to_string()))
    };
    CompilerRange {
        name: name.to_string(),
        min,
        max,
    }
}

/// Tests whether two compiler specifiers can be satisfied simultaneously.
///
/// An empty specifier is compatible with anything. Non-empty specifiers are
/// incompatible when their names differ or when one side's maximum falls
/// below the other side's minimum.
pub fn compilers_compatible(first: &str, second: &str, cmp: &impl VersionCompare) -> bool {
    if first.is_empty() || second.is_empty() {
        return true;
    }
    let a = expand_compiler(first);
    let b = expand_compiler(second);
    if a.name != b.name {
        return false;
    }
    if let Some(max) = &a.max {
        if cmp.compare(max, &b.min) == Ordering::Less {
            return false;
        }
    }
    if let Some(max) = &b.max {
        if cmp.compare(max, &a.min) == Ordering::Less {
            return false;
        }
    }
    true
}

/// Computes the intersection of two compiler specifiers.
///
/// Returns the empty string when both inputs are empty or the inputs are
/// incompatible; callers treat empty as "no usable intersection". Otherwise
/// the result re-encodes the merged range:
///
/// - unconstrained max, min at the sentinel: `name`
/// - unconstrained max, real min: `name@>=min`
/// - bounded with `min == max`: `name@min`
///
/// A bounded range with `min != max` has no encoding in the specifier
/// grammar and yields the empty string. With the three admitted input forms
/// that case cannot arise from compatible inputs (an exact version pins both
/// bounds to the same value), so this is unreachable in practice; it is kept
/// explicit rather than widened to a two-sided range syntax.
pub fn compilers_intersect(first: &str, second: &str, cmp: &impl VersionCompare) -> String {
    if (first.is_empty() && second.is_empty()) || !compilers_compatible(first, second, cmp) {
        return String::new();
    }
    let a = expand_compiler(first);
    let b = expand_compiler(second);

    // An absent max inherits the other side's max.
    let a_max = a.max.clone().or_else(|| b.max.clone());
    let b_max = b.max.or(a.max);

    let name = if a.name.is_empty() { &b.name } else { &a.name };
    let min = if cmp.compare(&a.min, &b.min) == Ordering::Less {
        &b.min
    } else {
        &a.min
    };
    let max = match (a_max, b_max) {
        (Some(x), Some(y)) => Some(if cmp.compare(&x, &y) == Ordering::Greater {
            y
        } else {
            x
        }),
        _ => None,
    };

    match max {
        None => {
            if cmp.compare(min, ANY_VERSION) == Ordering::Equal {
                // any version
                name.clone()
            } else {
                // minimum version
                format!("{name}@>={min}")
            }
        }
        Some(max) => {
            if *min == max {
                // fixed version
                format!("{name}@{min}")
            } else {
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_any_version() {
        let range = expand_compiler("GCC");
        assert_eq!(range.name, "GCC");
        assert_eq!(range.min, ANY_VERSION);
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_expand_minimum_version() {
        let range = expand_compiler("GCC@>=10.2.0");
        assert_eq!(range.name, "GCC");
        assert_eq!(range.min, "10.2.0");
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_expand_exact_version() {
        let range = expand_compiler("AC6@6.18.0");
        assert_eq!(range.name, "AC6");
        assert_eq!(range.min, "6.18.0");
        assert_eq!(range.max.as_deref(), Some("6.18.0"));
    }

    #[test]
    fn test_expand_empty() {
        let range = expand_compiler("");
        assert_eq!(range.name, "");
        assert_eq!(range.min, ANY_VERSION);
        assert_eq!(range.max, None);
    }

    #[test]
    fn test_compatible_empty_side() {
        let cmp = DefaultVersionCmp;
        assert!(compilers_compatible("GCC", "", &cmp));
        assert!(compilers_compatible("", "GCC@6.0.0", &cmp));
        assert!(compilers_compatible("", "", &cmp));
    }

    #[test]
    fn test_compatible_name_mismatch() {
        let cmp = DefaultVersionCmp;
        assert!(!compilers_compatible("GCC", "AC6", &cmp));
    }

    #[test]
    fn test_incompatible_exact_below_minimum() {
        let cmp = DefaultVersionCmp;
        assert!(!compilers_compatible("GCC@6.0.0", "GCC@>=10.2.0", &cmp));
    }

    #[test]
    fn test_compatible_overlapping_ranges() {
        let cmp = DefaultVersionCmp;
        assert!(compilers_compatible("GCC@>=10.2.0", "GCC@11.3.0", &cmp));
        assert!(compilers_compatible("GCC@>=10.2.0", "GCC@>=12.0.0", &cmp));
        assert!(compilers_compatible("GCC@10.2.0", "GCC@10.2.0", &cmp));
    }

    #[test]
    fn test_compatible_is_symmetric() {
        let cmp = DefaultVersionCmp;
        let specs = ["", "GCC", "GCC@6.0.0", "GCC@>=10.2.0", "AC6@6.18.0"];
        for a in specs {
            for b in specs {
                assert_eq!(
                    compilers_compatible(a, b, &cmp),
                    compilers_compatible(b, a, &cmp),
                    "asymmetric for ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_intersect_empty_inputs() {
        let cmp = DefaultVersionCmp;
        assert_eq!(compilers_intersect("", "", &cmp), "");
    }

    #[test]
    fn test_intersect_one_empty_side() {
        let cmp = DefaultVersionCmp;
        assert_eq!(compilers_intersect("", "GCC@>=10.2.0", &cmp), "GCC@>=10.2.0");
        assert_eq!(compilers_intersect("GCC@11.2.1", "", &cmp), "GCC@11.2.1");
    }

    #[test]
    fn test_intersect_any_with_minimum() {
        let cmp = DefaultVersionCmp;
        assert_eq!(compilers_intersect("GCC", "GCC@>=10.2.0", &cmp), "GCC@>=10.2.0");
    }

    #[test]
    fn test_intersect_any_with_any() {
        let cmp = DefaultVersionCmp;
        assert_eq!(compilers_intersect("GCC", "GCC", &cmp), "GCC");
    }

    #[test]
    fn test_intersect_minimum_with_exact() {
        let cmp = DefaultVersionCmp;
        assert_eq!(
            compilers_intersect("GCC@>=10.2.0", "GCC@11.3.0", &cmp),
            "GCC@11.3.0"
        );
    }

    #[test]
    fn test_intersect_two_minimums() {
        let cmp = DefaultVersionCmp;
        assert_eq!(
            compilers_intersect("GCC@>=10.2.0", "GCC@>=12.0.0", &cmp),
            "GCC@>=12.0.0"
        );
    }

    #[test]
    fn test_intersect_incompatible() {
        let cmp = DefaultVersionCmp;
        assert_eq!(compilers_intersect("GCC@6.0.0", "GCC@>=10.2.0", &cmp), "");
        assert_eq!(compilers_intersect("GCC", "AC6", &cmp), "");
    }

    #[test]
    fn test_intersect_commutative() {
        let cmp = DefaultVersionCmp;
        let specs = ["", "GCC", "GCC@11.2.1", "GCC@>=10.2.0", "GCC@>=12.0.0"];
        for a in specs {
            for b in specs {
                assert_eq!(
                    compilers_intersect(a, b, &cmp),
                    compilers_intersect(b, a, &cmp),
                    "non-commutative for ({a}, {b})"
                );
            }
        }
    }

    #[test]
    fn test_intersect_transitive_merge() {
        // Folding many requirements pairwise must stay consistent.
        let cmp = DefaultVersionCmp;
        let merged = ["GCC", "GCC@>=10.2.0", "GCC@>=11.0.0", "GCC@11.2.1"]
            .iter()
            .fold(String::new(), |acc, spec| {
                compilers_intersect(&acc, spec, &cmp)
            });
        assert_eq!(merged, "GCC@11.2.1");
    }

    #[test]
    fn test_injected_comparator_is_used() {
        // A comparator that treats every version as equal makes any two
        // same-named specifiers compatible.
        let everything_equal = |_: &str, _: &str| Ordering::Equal;
        assert!(compilers_compatible(
            "GCC@6.0.0",
            "GCC@>=10.2.0",
            &everything_equal
        ));
    }

    #[test]
    fn test_default_cmp_non_semver_versions() {
        let cmp = DefaultVersionCmp;
        assert_eq!(cmp.compare("6.16", "10.2.0"), Ordering::Less);
        assert_eq!(cmp.compare("10.2.0", "10.2"), Ordering::Equal);
        assert_eq!(cmp.compare("1.2.3", "1.2.4"), Ordering::Less);
        assert_eq!(cmp.compare("11.3.1", "10.2.0"), Ordering::Greater);
    }
}
