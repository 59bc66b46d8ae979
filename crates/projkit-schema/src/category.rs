//! File classification by extension.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Build-relevant category of a file, derived from its extension.
///
/// Matching is case-sensitive: `.C` counts as C source while `.c` does too,
/// but `.H` is unclassified. Files without a known extension fall into
/// [`FileCategory::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FileCategory {
    /// C source file.
    SourceC,
    /// C++ source file.
    SourceCpp,
    /// Assembly source file.
    SourceAsm,
    /// C/C++ header.
    Header,
    /// Static library archive.
    Library,
    /// Relocatable object file.
    Object,
    /// Linker script.
    LinkerScript,
    /// Documentation file.
    Doc,
    /// Anything not covered by the table above.
    Other,
}

/// Extension table, checked in order. First category owning the extension wins.
const CATEGORIES: &[(FileCategory, &[&str])] = &[
    (FileCategory::SourceC, &["c", "C"]),
    (FileCategory::SourceCpp, &["cpp", "c++", "C++", "cxx", "cc", "CC"]),
    (FileCategory::SourceAsm, &["asm", "s", "S"]),
    (FileCategory::Header, &["h", "hpp"]),
    (FileCategory::Library, &["a", "lib"]),
    (FileCategory::Object, &["o"]),
    (FileCategory::LinkerScript, &["sct", "scf", "ld", "icf"]),
    (FileCategory::Doc, &["txt", "md", "pdf", "htm", "html"]),
];

impl FileCategory {
    /// Classifies a file path by its extension.
    pub fn from_path(file: impl AsRef<Path>) -> Self {
        let Some(ext) = file.as_ref().extension().and_then(|e| e.to_str()) else {
            return Self::Other;
        };
        for (category, extensions) in CATEGORIES {
            if extensions.contains(&ext) {
                return *category;
            }
        }
        Self::Other
    }

    /// Category token as used in generated project descriptions.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SourceC => "sourceC",
            Self::SourceCpp => "sourceCpp",
            Self::SourceAsm => "sourceAsm",
            Self::Header => "header",
            Self::Library => "library",
            Self::Object => "object",
            Self::LinkerScript => "linkerScript",
            Self::Doc => "doc",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for FileCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
