//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::EnvError;
use owo_colors::OwoColorize;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &EnvError) -> String {
    format!("{} {}", "error:".red().bold(), e)
}
