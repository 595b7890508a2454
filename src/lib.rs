//! Envtree: typed access to hierarchical TOML configuration
//!
//! A loaded document is an [`Env`]. [`Env::get`] resolves a dotted key to an
//! [`EnvValue`], whose getters return typed values and fall back to defaults
//! instead of failing:
//!
//! ```
//! let env: envtree::Env = "[app]\nports = [80, 443]\n".parse().unwrap();
//! assert_eq!(env.get("app.ports").ints(&[]), vec![80, 443]);
//! assert_eq!(env.get("app.name").string(Some("demo")), "demo");
//! ```
//!
//! The [`global`] module keeps one process-wide document for applications that
//! prefer `envtree::env("app.debug").bool(None)` over passing a handle around.

pub mod cli;
pub mod env;
pub mod error;
pub mod global;
pub mod key;
pub mod loader;
pub mod logging;
pub mod node;
pub mod settings;
pub mod template;
pub mod value;

pub use env::Env;
pub use error::EnvError;
pub use global::{
    current, env, init_env, load_env_from_bytes, load_env_from_file, load_env_from_str,
};
pub use node::{Node, NodeKind, Tree};
pub use value::{zero_time, EnvValue};
