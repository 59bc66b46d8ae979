//! projkit - command-line surface over the identifier and
//! version-constraint engine.
//!
//! Every subcommand is a thin wrapper over one `projkit-core` operation so
//! the engine can be exercised from scripts and while debugging solution
//! files. Degraded results (unknown identifiers, empty intersections) print
//! as empty output with exit code 0; per the engine's contract, absence of
//! data is not an error.

use clap::{Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Debug, Parser)]
#[command(name = "projkit")]
#[command(author, version, about = "Identifier and compiler-constraint tooling")]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// One subcommand per engine operation.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Construct a component identifier from its attributes
    ComponentId {
        /// Component vendor
        #[arg(long, default_value = "")]
        vendor: String,
        /// Component class name (required for a full identifier)
        #[arg(long)]
        class: String,
        /// Bundle name
        #[arg(long, default_value = "")]
        bundle: String,
        /// Group name
        #[arg(long, default_value = "")]
        group: String,
        /// Sub-group name
        #[arg(long, default_value = "")]
        sub: String,
        /// Variant name
        #[arg(long, default_value = "")]
        variant: String,
        /// Version string
        #[arg(long, default_value = "")]
        version: String,
        /// Emit the aggregate identifier (no variant/version)
        #[arg(long, conflicts_with = "partial")]
        aggregate: bool,
        /// Emit the partial identifier (no vendor/version)
        #[arg(long)]
        partial: bool,
    },
    /// Decompose a component identifier into its attributes (JSON)
    Decompose {
        /// The identifier to decompose
        id: String,
    },
    /// Construct a pack identifier
    PackId {
        /// Pack vendor
        #[arg(long, default_value = "")]
        vendor: String,
        /// Pack name
        #[arg(long)]
        name: String,
        /// Pack version
        #[arg(long, default_value = "")]
        version: String,
    },
    /// Expand a compiler specifier into name and version bounds (JSON)
    Expand {
        /// Specifier in the form `name[@[>=]version]`
        specifier: String,
    },
    /// Test whether two compiler specifiers are compatible
    Compatible {
        /// First specifier
        first: String,
        /// Second specifier
        second: String,
    },
    /// Intersect two compiler specifiers
    Intersect {
        /// First specifier
        first: String,
        /// Second specifier
        second: String,
    },
    /// Parse a context entry `project[.build][+target]` (JSON)
    Context {
        /// The context entry to parse
        entry: String,
    },
    /// Classify a file by its extension
    Category {
        /// File path to classify
        file: String,
    },
    /// Print the resolved compiler root directory
    CompilerRoot,
    /// Run a shell command, echoing its stdout and exit code
    Run {
        /// Command line to pass to the shell
        cmd: String,
    },
}
