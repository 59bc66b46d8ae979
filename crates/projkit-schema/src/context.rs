//! The parsed context-name triple.

use serde::{Deserialize, Serialize};

/// A context entry split into its three parts.
///
/// The string form is `project[.build][+target]`; the `.` and `+` separators
/// may appear in either order in the input, and each part may be absent
/// (represented as an empty string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextName {
    /// Project name, before the first `.` or `+` separator.
    pub project: String,
    /// Build type, after the `.` separator.
    pub build: String,
    /// Target type, after the `+` separator.
    pub target: String,
}

impl std::fmt::Display for ContextName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.project)?;
        if !self.build.is_empty() {
            write!(f, ".{}", self.build)?;
        }
        if !self.target.is_empty() {
            write!(f, "+{}", self.target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_full() {
        let context = ContextName {
            project: "myproj".into(),
            build: "Debug".into(),
            target: "Board".into(),
        };
        assert_eq!(context.to_string(), "myproj.Debug+Board");
    }

    #[test]
    fn test_display_elides_empty_parts() {
        let context = ContextName {
            project: "myproj".into(),
            build: String::new(),
            target: "Board".into(),
        };
        assert_eq!(context.to_string(), "myproj+Board");

        let bare = ContextName {
            project: "myproj".into(),
            ..ContextName::default()
        };
        assert_eq!(bare.to_string(), "myproj");
    }
}
