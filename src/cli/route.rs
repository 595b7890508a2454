//! CLI route: single route table and run context. Dispatches to the loader and presentation.

use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_check, format_init, format_keys_table, format_tree, format_value, section_tree,
};
use crate::env::Env;
use crate::error::EnvError;
use crate::loader::{self, LoadOptions};
use crate::settings::Settings;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: where the env document lives and how it is loaded.
pub struct RunContext {
    options: LoadOptions,
}

impl RunContext {
    /// Build from settings; an explicit `file` overrides the configured path.
    pub fn new(file: Option<PathBuf>, no_create: bool, settings: &Settings) -> Self {
        let mut options = settings.env.clone();
        if let Some(file) = file {
            options.path = file;
        }
        if no_create {
            options.create_if_missing = false;
        }
        Self { options }
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    pub fn execute(&self, command: &Commands) -> Result<String, EnvError> {
        match command {
            Commands::Get {
                key,
                as_type,
                default,
                layout,
            } => {
                let env = self.load()?;
                format_value(&env.get(key), *as_type, default.as_deref(), layout)
            }
            Commands::Keys { section } => {
                let env = self.load()?;
                Ok(format_keys_table(&section_tree(&env, section.as_deref())))
            }
            Commands::Dump { section, format } => {
                let env = self.load()?;
                format_tree(&section_tree(&env, section.as_deref()), *format)
            }
            Commands::Check => {
                let env = self.load()?;
                Ok(format_check(&self.options.path, &env))
            }
            Commands::Init { force } => {
                let created = loader::write_template(&self.options.path, *force)?;
                Ok(format_init(&self.options.path, created))
            }
        }
    }

    fn load(&self) -> Result<Env, EnvError> {
        debug!(path = %self.options.path.display(), "Loading env document");
        loader::load_with(&self.options)
    }
}
