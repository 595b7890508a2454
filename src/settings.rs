//! Settings for the crate itself: where the env document lives and how to log.
//!
//! Built with the `config` crate. Precedence (lowest to highest):
//! 1. Built-in defaults
//! 2. `ENVTREE_*` environment variables, `__` separating nested keys
//!    (`ENVTREE_ENV__PATH`, `ENVTREE_LOGGING__LEVEL`)

use crate::error::EnvError;
use crate::loader::LoadOptions;
use crate::logging::LoggingConfig;
use crate::template::DEFAULT_ENV_FILE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment};
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read by [`Settings::load`].
pub const ENV_PREFIX: &str = "ENVTREE";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Env document location and bootstrap behaviour
    #[serde(default)]
    pub env: LoadOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Settings {
    /// Defaults overridden by the process environment.
    pub fn load() -> Result<Self, EnvError> {
        Self::load_from(environment())
    }

    /// Defaults overridden by `environment`. Tests pass an [`Environment`]
    /// with an explicit source map.
    pub fn load_from(environment: Environment) -> Result<Self, EnvError> {
        let settings = builder_with_defaults()?
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        Ok(settings)
    }
}

/// `ENVTREE_`-prefixed environment source with `__` as the nesting separator.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let logging = LoggingConfig::default();
    Config::builder()
        .set_default("env.path", DEFAULT_ENV_FILE)?
        .set_default("env.create_if_missing", true)?
        .set_default("env.repair_permissions", true)?
        .set_default("logging.level", logging.level)?
        .set_default("logging.format", logging.format)?
        .set_default("logging.output", logging.output)?
        .set_default("logging.color", logging.color)
}
