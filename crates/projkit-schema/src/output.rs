//! Build output selection.
//!
//! A build step produces any combination of five output artifacts. Each
//! toggle is independent and may carry an explicit target filename.

use serde::{Deserialize, Serialize};

/// The five selectable output artifact kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Raw binary image (`bin`).
    Bin,
    /// Executable image with symbols (`elf`).
    Elf,
    /// Intel HEX image (`hex`).
    Hex,
    /// Static library (`lib`).
    Lib,
    /// Secure-gateway import library (`cmse-lib`).
    #[serde(rename = "cmse-lib")]
    CmseLib,
}

/// Error returned when an output-kind token is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown output type: {0}")]
pub struct ParseOutputKindError(pub String);

impl OutputKind {
    /// Token used for this kind in configuration input.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::Elf => "elf",
            Self::Hex => "hex",
            Self::Lib => "lib",
            Self::CmseLib => "cmse-lib",
        }
    }
}

impl std::fmt::Display for OutputKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for OutputKind {
    type Err = ParseOutputKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bin" => Ok(Self::Bin),
            "elf" => Ok(Self::Elf),
            "hex" => Ok(Self::Hex),
            "lib" => Ok(Self::Lib),
            "cmse-lib" => Ok(Self::CmseLib),
            _ => Err(ParseOutputKindError(s.to_string())),
        }
    }
}

/// A single output toggle with its optional target filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputType {
    /// Whether this output is requested.
    pub on: bool,
    /// Target filename override; empty means the tool default.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub filename: String,
}

/// The full set of output toggles for a build step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputTypes {
    /// Raw binary image.
    pub bin: OutputType,
    /// Executable image with symbols.
    pub elf: OutputType,
    /// Intel HEX image.
    pub hex: OutputType,
    /// Static library.
    pub lib: OutputType,
    /// Secure-gateway import library.
    pub cmse: OutputType,
}

impl OutputTypes {
    /// Turns on the toggle for `kind`.
    pub fn enable(&mut self, kind: OutputKind) {
        self.get_mut(kind).on = true;
    }

    /// Turns on the toggle named by `token`; unrecognized tokens are ignored.
    pub fn set(&mut self, token: &str) {
        if let Ok(kind) = token.parse::<OutputKind>() {
            self.enable(kind);
        }
    }

    /// Immutable access to the toggle for `kind`.
    pub fn get(&self, kind: OutputKind) -> &OutputType {
        match kind {
            OutputKind::Bin => &self.bin,
            OutputKind::Elf => &self.elf,
            OutputKind::Hex => &self.hex,
            OutputKind::Lib => &self.lib,
            OutputKind::CmseLib => &self.cmse,
        }
    }

    /// Mutable access to the toggle for `kind`.
    pub fn get_mut(&mut self, kind: OutputKind) -> &mut OutputType {
        match kind {
            OutputKind::Bin => &mut self.bin,
            OutputKind::Elf => &mut self.elf,
            OutputKind::Hex => &mut self.hex,
            OutputKind::Lib => &mut self.lib,
            OutputKind::CmseLib => &mut self.cmse,
        }
    }
}
