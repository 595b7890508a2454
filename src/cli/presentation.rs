//! CLI presentation: text, toml and json formatters for command results.

use crate::cli::parse::{DumpFormat, ValueType};
use crate::env::Env;
use crate::error::EnvError;
use crate::node::{Node, Tree};
use crate::value::EnvValue;
use chrono::{DateTime, SecondsFormat};
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

/// Read `value` with the getter named by `as_type` and render the result.
///
/// `default` is parsed into the getter's type; array defaults are
/// comma-separated.
pub fn format_value(
    value: &EnvValue<'_>,
    as_type: ValueType,
    default: Option<&str>,
    layout: &str,
) -> Result<String, EnvError> {
    let output = match as_type {
        ValueType::Int => value.int(parse_default(default)?).to_string(),
        ValueType::Float => value.float(parse_default(default)?).to_string(),
        ValueType::Bool => value.bool(parse_default(default)?).to_string(),
        ValueType::String => value.string(default),
        ValueType::Ints => to_json(&value.ints(&parse_list::<i64>(default)?))?,
        ValueType::Floats => to_json(&value.floats(&parse_list::<f64>(default)?))?,
        ValueType::Strings => {
            let defaults: Vec<&str> = split_list(default).collect();
            to_json(&value.strings(&defaults))?
        }
        ValueType::Time => {
            let default = default
                .map(DateTime::parse_from_rfc3339)
                .transpose()
                .map_err(|e| EnvError::InvalidArgument(format!("default time: {}", e)))?;
            value
                .time(layout, default)
                .to_rfc3339_opts(SecondsFormat::AutoSi, true)
        }
        ValueType::Map => format_tree(&value.map(), DumpFormat::Toml)?,
    };
    Ok(output)
}

/// Section tree for `keys` and `dump`; the root when `section` is `None`.
pub fn section_tree(env: &Env, section: Option<&str>) -> Tree {
    match section {
        Some(key) => env.get(key).map(),
        None => env.root().clone(),
    }
}

pub fn format_tree(tree: &Tree, format: DumpFormat) -> Result<String, EnvError> {
    match format {
        DumpFormat::Toml => toml::to_string(tree).map_err(|e| EnvError::Encode(e.to_string())),
        DumpFormat::Json => serde_json::to_string_pretty(&Node::Tree(tree.clone()).to_json())
            .map_err(|e| EnvError::Encode(e.to_string())),
    }
}

pub fn format_keys_table(tree: &Tree) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Key", "Kind", "Value"]);
    for (key, node) in tree {
        table.add_row(vec![key.clone(), node.kind().to_string(), preview(node)]);
    }
    table.to_string()
}

pub fn format_check(path: &Path, env: &Env) -> String {
    format!(
        "{} {} ({} top-level keys)",
        "ok".green(),
        path.display(),
        env.keys().len()
    )
}

pub fn format_init(path: &Path, created: bool) -> String {
    if created {
        format!("Created {}", path.display())
    } else {
        format!(
            "Skipped {} (already exists, use --force to overwrite)",
            path.display()
        )
    }
}

fn preview(node: &Node) -> String {
    match node {
        Node::Absent => "-".to_string(),
        Node::Int(i) => i.to_string(),
        Node::Float(f) => f.to_string(),
        Node::String(s) => format!("{:?}", s),
        Node::Bool(b) => b.to_string(),
        Node::Timestamp { raw, .. } => raw.to_string(),
        Node::Array(items) => format!("[{} items]", items.len()),
        Node::Tree(tree) => format!("{{{} keys}}", tree.len()),
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, EnvError> {
    serde_json::to_string(value).map_err(|e| EnvError::Encode(e.to_string()))
}

fn parse_default<T>(raw: Option<&str>) -> Result<Option<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.map(|s| s.trim().parse::<T>())
        .transpose()
        .map_err(|e| EnvError::InvalidArgument(format!("default {:?}: {}", raw.unwrap_or(""), e)))
}

fn split_list(raw: Option<&str>) -> impl Iterator<Item = &str> {
    raw.unwrap_or("")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

fn parse_list<T>(raw: Option<&str>) -> Result<Vec<T>, EnvError>
where
    T: FromStr,
    T::Err: Display,
{
    split_list(raw)
        .map(|s| {
            s.parse::<T>()
                .map_err(|e| EnvError::InvalidArgument(format!("default element {:?}: {}", s, e)))
        })
        .collect()
}
