//! Loading env documents from disk.
//!
//! A missing file is created from [`DEFAULT_TEMPLATE`] before parsing, and a
//! file that cannot be read for lack of permissions has its mode widened once
//! before the read is retried. Both behaviours can be switched off through
//! [`LoadOptions`].

use crate::env::Env;
use crate::error::EnvError;
use crate::template::{DEFAULT_ENV_FILE, DEFAULT_TEMPLATE};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// How a document is located and prepared before parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Document path; relative paths resolve against the current directory
    #[serde(default = "default_path")]
    pub path: PathBuf,

    /// Write the default template when the file does not exist
    #[serde(default = "default_true")]
    pub create_if_missing: bool,

    /// Widen permissions of a file that cannot be read
    #[serde(default = "default_true")]
    pub repair_permissions: bool,
}

fn default_path() -> PathBuf {
    PathBuf::from(DEFAULT_ENV_FILE)
}

fn default_true() -> bool {
    true
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::new(default_path())
    }
}

impl LoadOptions {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            create_if_missing: default_true(),
            repair_permissions: default_true(),
        }
    }
}

/// Load `path` with the default options.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Env, EnvError> {
    load_with(&LoadOptions::new(path.as_ref()))
}

pub fn load_with(options: &LoadOptions) -> Result<Env, EnvError> {
    let path = absolute_path(&options.path)?;

    if options.create_if_missing {
        write_template(&path, false)?;
    }

    let content = match std::fs::read_to_string(&path) {
        Err(e) if e.kind() == ErrorKind::PermissionDenied && options.repair_permissions => {
            warn!(path = %path.display(), "Env file is not readable, widening permissions");
            repair_permissions(&path)?;
            std::fs::read_to_string(&path)
        }
        other => other,
    }
    .map_err(|e| EnvError::io(&path, e))?;

    let env: Env = content.parse()?;
    debug!(path = %path.display(), keys = env.keys().len(), "Loaded env file");
    Ok(env)
}

/// Write the default template to `path`, creating parent directories.
///
/// Returns `false` without touching the file when it already exists and
/// `force` is not set.
pub fn write_template(path: &Path, force: bool) -> Result<bool, EnvError> {
    match std::fs::metadata(path) {
        Ok(_) if !force => return Ok(false),
        Ok(_) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(EnvError::io(path, e)),
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| EnvError::io(parent, e))?;
        }
    }
    std::fs::write(path, DEFAULT_TEMPLATE).map_err(|e| EnvError::io(path, e))?;

    info!(path = %path.display(), "Created env file from default template");
    Ok(true)
}

#[cfg(unix)]
fn repair_permissions(path: &Path) -> Result<(), EnvError> {
    use std::os::unix::fs::PermissionsExt;

    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o777))
        .map_err(|e| EnvError::io(path, e))
}

#[cfg(not(unix))]
fn repair_permissions(path: &Path) -> Result<(), EnvError> {
    let mut permissions = std::fs::metadata(path)
        .map_err(|e| EnvError::io(path, e))?
        .permissions();
    permissions.set_readonly(false);
    std::fs::set_permissions(path, permissions).map_err(|e| EnvError::io(path, e))
}

fn absolute_path(path: &Path) -> Result<PathBuf, EnvError> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().map_err(|e| EnvError::io(path, e))?;
    Ok(dunce::simplified(&cwd.join(path)).to_path_buf())
}
