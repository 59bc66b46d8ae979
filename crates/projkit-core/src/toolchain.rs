//! Compiler-root resolution.
//!
//! The toolchain configuration directory is found through an explicit
//! environment override, falling back to an `etc` directory next to the
//! running executable's installation prefix. All process-wide lookups go
//! through the [`Environment`] capability so the resolution stays testable
//! and free of ambient global state.

use std::path::{Path, PathBuf};

use tracing::debug;

/// Environment variable overriding the compiler root location.
pub const COMPILER_ROOT_VAR: &str = "PROJKIT_COMPILER_ROOT";

/// Process-environment and filesystem lookups needed by root resolution.
pub trait Environment {
    /// Reads an environment variable, `None` if unset or not unicode.
    fn var(&self, name: &str) -> Option<String>;
    /// Path of the running executable, if it can be determined.
    fn executable_path(&self) -> Option<PathBuf>;
    /// Whether `path` exists on disk.
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl Environment for SystemEnv {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn executable_path(&self) -> Option<PathBuf> {
        std::env::current_exe().ok()
    }
}

/// Resolves the compiler root directory.
///
/// Order: the [`COMPILER_ROOT_VAR`] override if set, else `<prefix>/etc`
/// where `<prefix>` is the parent of the executable's directory, provided
/// that directory exists. Returns an empty string when neither yields a
/// usable path. The result is canonicalized when possible and normalized to
/// forward slashes.
pub fn compiler_root(env: &dyn Environment) -> String {
    let mut root = env.var(COMPILER_ROOT_VAR).unwrap_or_default();
    if root.is_empty() {
        if let Some(candidate) = env
            .executable_path()
            .as_deref()
            .and_then(Path::parent)
            .and_then(Path::parent)
            .map(|prefix| prefix.join("etc"))
        {
            if env.exists(&candidate) {
                root = candidate.to_string_lossy().into_owned();
            }
        }
    }
    if !root.is_empty() {
        if let Ok(canonical) = std::fs::canonicalize(&root) {
            root = canonical.to_string_lossy().into_owned();
        }
        root = root.replace('\\', "/");
        debug!(root, "resolved compiler root");
    }
    root
}
