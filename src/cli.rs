//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; single route table dispatches to the loader and accessors.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, DumpFormat, ValueType};
pub use presentation::{format_keys_table, format_tree, format_value};
pub use route::RunContext;
