//! Parsed configuration nodes.
//!
//! A document is converted once, at load time, from `toml::Value` into a
//! [`Node`] tree. Every typed getter is a match over this enum, which keeps
//! the "nothing here" case ([`Node::Absent`]) apart from "something of the
//! wrong shape".

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeZone};
use serde::ser::{Serialize, Serializer};
use std::collections::BTreeMap;
use toml::value::{Datetime, Offset};

/// Named children of a table node, ordered by key.
pub type Tree = BTreeMap<String, Node>;

/// One unit of a loaded document.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// The key did not resolve to anything.
    #[default]
    Absent,
    Int(i64),
    Float(f64),
    String(String),
    Bool(bool),
    /// A TOML date, time or date-time. `raw` is the value as written and is
    /// what gets encoded back; `at` is the instant it denotes, `None` for a
    /// bare time of day.
    Timestamp {
        at: Option<DateTime<FixedOffset>>,
        raw: Datetime,
    },
    Array(Vec<Node>),
    Tree(Tree),
}

/// Shape of a node, used in logs and error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Absent,
    Int,
    Float,
    String,
    Bool,
    Timestamp,
    Array,
    Tree,
}

impl NodeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::Absent => "absent",
            NodeKind::Int => "integer",
            NodeKind::Float => "float",
            NodeKind::String => "string",
            NodeKind::Bool => "boolean",
            NodeKind::Timestamp => "datetime",
            NodeKind::Array => "array",
            NodeKind::Tree => "tree",
        }
    }
}

impl std::fmt::Display for NodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Absent => NodeKind::Absent,
            Node::Int(_) => NodeKind::Int,
            Node::Float(_) => NodeKind::Float,
            Node::String(_) => NodeKind::String,
            Node::Bool(_) => NodeKind::Bool,
            Node::Timestamp { .. } => NodeKind::Timestamp,
            Node::Array(_) => NodeKind::Array,
            Node::Tree(_) => NodeKind::Tree,
        }
    }

    /// Timestamp node for a TOML datetime.
    pub fn timestamp(raw: Datetime) -> Self {
        Node::Timestamp {
            at: timestamp_from_toml(&raw),
            raw,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Node::Absent)
    }

    /// Convert back into a TOML value. `None` for [`Node::Absent`]; absent
    /// children of arrays and tables are dropped.
    pub fn to_toml(&self) -> Option<toml::Value> {
        let value = match self {
            Node::Absent => return None,
            Node::Int(i) => toml::Value::Integer(*i),
            Node::Float(f) => toml::Value::Float(*f),
            Node::String(s) => toml::Value::String(s.clone()),
            Node::Bool(b) => toml::Value::Boolean(*b),
            Node::Timestamp { raw, .. } => toml::Value::Datetime(*raw),
            Node::Array(items) => toml::Value::Array(items.iter().filter_map(Node::to_toml).collect()),
            Node::Tree(tree) => toml::Value::Table(tree_to_table(tree)),
        };
        Some(value)
    }

    /// JSON rendering with dates and times as their TOML text.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Node::Absent => serde_json::Value::Null,
            Node::Int(i) => serde_json::Value::from(*i),
            Node::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Node::String(s) => serde_json::Value::String(s.clone()),
            Node::Bool(b) => serde_json::Value::Bool(*b),
            Node::Timestamp { raw, .. } => serde_json::Value::String(raw.to_string()),
            Node::Array(items) => serde_json::Value::Array(items.iter().map(Node::to_json).collect()),
            Node::Tree(tree) => serde_json::Value::Object(
                tree.iter()
                    .filter(|(_, node)| !node.is_absent())
                    .map(|(key, node)| (key.clone(), node.to_json()))
                    .collect(),
            ),
        }
    }
}

pub(crate) fn tree_to_table(tree: &Tree) -> toml::Table {
    tree.iter()
        .filter_map(|(key, node)| node.to_toml().map(|value| (key.clone(), value)))
        .collect()
}

pub(crate) fn tree_from_table(table: toml::Table) -> Tree {
    table
        .into_iter()
        .map(|(key, value)| (key, Node::from(value)))
        .collect()
}

impl From<toml::Value> for Node {
    fn from(value: toml::Value) -> Self {
        match value {
            toml::Value::Integer(i) => Node::Int(i),
            toml::Value::Float(f) => Node::Float(f),
            toml::Value::String(s) => Node::String(s),
            toml::Value::Boolean(b) => Node::Bool(b),
            toml::Value::Datetime(raw) => Node::timestamp(raw),
            toml::Value::Array(items) => Node::Array(items.into_iter().map(Node::from).collect()),
            toml::Value::Table(table) => Node::Tree(tree_from_table(table)),
        }
    }
}

/// Local date-times are taken as UTC and local dates as UTC midnight.
fn timestamp_from_toml(dt: &Datetime) -> Option<DateTime<FixedOffset>> {
    let date = dt.date?;
    let date = NaiveDate::from_ymd_opt(
        i32::from(date.year),
        u32::from(date.month),
        u32::from(date.day),
    )?;
    let time = match dt.time {
        Some(t) => NaiveTime::from_hms_nano_opt(
            u32::from(t.hour),
            u32::from(t.minute),
            u32::from(t.second),
            t.nanosecond,
        )?,
        None => NaiveTime::MIN,
    };
    let offset = match dt.offset {
        Some(Offset::Custom { minutes }) => FixedOffset::east_opt(i32::from(minutes) * 60)?,
        Some(Offset::Z) | None => FixedOffset::east_opt(0)?,
    };
    offset.from_local_datetime(&date.and_time(time)).single()
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Node::Absent => serializer.serialize_none(),
            Node::Int(i) => serializer.serialize_i64(*i),
            Node::Float(f) => serializer.serialize_f64(*f),
            Node::String(s) => serializer.serialize_str(s),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Timestamp { raw, .. } => raw.serialize(serializer),
            Node::Array(items) => serializer.collect_seq(items.iter().filter(|n| !n.is_absent())),
            Node::Tree(tree) => {
                serializer.collect_map(tree.iter().filter(|(_, node)| !node.is_absent()))
            }
        }
    }
}
