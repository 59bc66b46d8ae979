//! Shared value types for the projkit identifier and version-constraint engine.
//!
//! Everything in this crate is a plain value object: attribute records fed
//! into the identifier codec, the parsed context-name triple, output-type
//! toggles, the file-category table, and the shell-execution result contract.
//! Logic lives in `projkit-core`; this crate holds only data, constructors,
//! and string conversions.

pub mod category;
pub mod component;
pub mod context;
pub mod exec;
pub mod output;

// Re-exports
pub use category::FileCategory;
pub use component::{ComponentAttributes, PackAttributes};
pub use context::ContextName;
pub use exec::ExecResult;
pub use output::{OutputKind, OutputType, OutputTypes, ParseOutputKindError};
