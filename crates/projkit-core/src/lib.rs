//! projkit-core: the identifier and version-constraint engine.
//!
//! Three pieces with real semantics, plus their supporting helpers:
//!
//! - [`ident`] constructs canonical delimiter-joined identifiers for
//!   components, component aggregates, and packs, and decomposes a full
//!   component identifier back into its attribute record.
//! - [`compiler`] expands `name[@[>=]version]` compiler specifiers into
//!   version ranges, tests pairwise compatibility, and intersects ranges.
//! - [`context`] splits `project[.build][+target]` context entries.
//!
//! All operations are pure, synchronous transformations over their inputs;
//! the only injected capabilities are the version comparator used by the
//! range algebra ([`compiler::VersionCompare`]) and the environment lookup
//! used for compiler-root resolution ([`toolchain::Environment`]).
//!
//! Malformed input is never an error here: absent or unparseable fields
//! degrade to empty strings, and callers treat empty results as "no data".

pub mod compiler;
pub mod context;
pub mod exec;
pub mod ident;
pub mod toolchain;
pub mod utils;

pub use compiler::{
    CompilerRange, DefaultVersionCmp, VersionCompare, compilers_compatible, compilers_intersect,
    expand_compiler,
};
pub use context::parse_context_entry;
pub use toolchain::{Environment, SystemEnv, compiler_root};
