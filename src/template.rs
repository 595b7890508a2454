//! Default env document written when a configured file does not exist yet.

/// File name used when no path is configured.
pub const DEFAULT_ENV_FILE: &str = "env.toml";

/// Default document, embedded at build time.
pub const DEFAULT_TEMPLATE: &str = include_str!("../templates/env.toml");
