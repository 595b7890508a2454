//! CLI parse: clap types for envtree. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Envtree CLI - typed access to hierarchical TOML configuration
#[derive(Parser)]
#[command(name = "envtree")]
#[command(about = "Read typed values from a TOML env document")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Env document path (overrides ENVTREE_ENV__PATH and the default env.toml)
    #[arg(long, short)]
    pub file: Option<PathBuf>,

    /// Do not create the env document when it is missing
    #[arg(long)]
    pub no_create: bool,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value at a dotted key
    Get {
        /// Dotted key, e.g. app.env or servers."alpha.local".ip
        key: String,
        /// Type to read the value as
        #[arg(long = "as", value_enum, default_value = "string")]
        as_type: ValueType,
        /// Default used when the key is absent (comma-separated for arrays)
        #[arg(long)]
        default: Option<String>,
        /// Layout for string timestamps (chrono format, e.g. %Y-%m-%d)
        #[arg(long, default_value = "%Y-%m-%dT%H:%M:%S%z")]
        layout: String,
    },
    /// List keys of the document or of one section
    Keys {
        /// Section key (omit for the document root)
        section: Option<String>,
    },
    /// Print the document or one section
    Dump {
        /// Section key (omit for the document root)
        section: Option<String>,
        /// Output format (toml or json)
        #[arg(long, value_enum, default_value = "toml")]
        format: DumpFormat,
    },
    /// Parse the env document and report errors
    Check,
    /// Write the default env document
    Init {
        /// Overwrite an existing document
        #[arg(long)]
        force: bool,
    },
}

/// Getter used by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    Int,
    Ints,
    Float,
    Floats,
    String,
    Strings,
    Bool,
    Time,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DumpFormat {
    Toml,
    Json,
}
