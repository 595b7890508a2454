//! Process-wide env slot.
//!
//! Holds at most one active [`Env`]. A load builds the new document completely
//! before swapping it in, so a failed load leaves the previous one active and
//! readers never observe a partially built tree. Readers take an `Arc`
//! snapshot and can keep using it across a reload.

use crate::env::Env;
use crate::error::EnvError;
use crate::loader::{self, LoadOptions};
use crate::settings::Settings;
use crate::value::EnvValue;
use parking_lot::{const_rwlock, RwLock};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

static CURRENT: RwLock<Option<Arc<Env>>> = const_rwlock(None);

/// Load the document named by [`Settings::load`] (default `env.toml`).
pub fn init_env() -> Result<(), EnvError> {
    let settings = Settings::load()?;
    load_env_with(&settings.env)
}

pub fn load_env_from_file(path: impl AsRef<Path>) -> Result<(), EnvError> {
    load_env_with(&LoadOptions::new(path.as_ref()))
}

pub fn load_env_with(options: &LoadOptions) -> Result<(), EnvError> {
    let env = loader::load_with(options)?;
    info!(path = %options.path.display(), "Env loaded");
    install(env);
    Ok(())
}

pub fn load_env_from_bytes(bytes: &[u8]) -> Result<(), EnvError> {
    install(Env::from_bytes(bytes)?);
    Ok(())
}

pub fn load_env_from_str(document: &str) -> Result<(), EnvError> {
    install(document.parse()?);
    Ok(())
}

/// Make `env` the active document, returning the one it replaces.
pub fn install(env: Env) -> Option<Arc<Env>> {
    CURRENT.write().replace(Arc::new(env))
}

/// Snapshot of the active document.
pub fn current() -> Option<Arc<Env>> {
    CURRENT.read().clone()
}

pub fn is_loaded() -> bool {
    CURRENT.read().is_some()
}

/// Resolve `key` against the active document.
///
/// The accessor owns a copy of the resolved node. With nothing loaded every
/// key is absent.
pub fn env(key: &str) -> EnvValue<'static> {
    let Some(env) = current() else {
        debug!(key, "No env loaded");
        return EnvValue::absent();
    };

    let value = env.get(key);
    if value.is_absent() {
        debug!(key, "Env key not found");
    }
    EnvValue::owned(value.node().clone())
}
