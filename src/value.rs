//! Typed access to a single resolved node.
//!
//! Fallback policy shared by every getter:
//! - absent node: the caller's default (or the type's zero value);
//! - node of the wrong shape: the zero value, the default is ignored;
//! - arrays are all-or-nothing, one element of the wrong type empties the result.

use crate::error::EnvError;
use crate::node::{tree_to_table, Node, NodeKind, Tree};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use serde::de::DeserializeOwned;
use std::borrow::Cow;

/// Zero value returned by [`EnvValue::time`] when nothing usable is found:
/// the Unix epoch in UTC.
pub fn zero_time() -> DateTime<FixedOffset> {
    DateTime::<FixedOffset>::default()
}

/// Accessor over one node of a loaded document.
#[derive(Debug, Clone)]
pub struct EnvValue<'a> {
    node: Cow<'a, Node>,
}

impl<'a> EnvValue<'a> {
    pub fn new(node: &'a Node) -> Self {
        Self {
            node: Cow::Borrowed(node),
        }
    }

    /// Accessor owning its node; used when the node outlives no tree.
    pub fn owned(node: Node) -> EnvValue<'static> {
        EnvValue {
            node: Cow::Owned(node),
        }
    }

    pub fn absent() -> EnvValue<'static> {
        EnvValue::owned(Node::Absent)
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.node.kind()
    }

    pub fn is_absent(&self) -> bool {
        self.node.is_absent()
    }

    pub fn int(&self, default: Option<i64>) -> i64 {
        match self.node() {
            Node::Absent => default.unwrap_or_default(),
            Node::Int(i) => *i,
            _ => 0,
        }
    }

    pub fn ints(&self, default: &[i64]) -> Vec<i64> {
        self.array(
            || default.to_vec(),
            |node| match node {
                Node::Int(i) => Some(*i),
                _ => None,
            },
        )
    }

    pub fn float(&self, default: Option<f64>) -> f64 {
        match self.node() {
            Node::Absent => default.unwrap_or_default(),
            Node::Float(f) => *f,
            _ => 0.0,
        }
    }

    pub fn floats(&self, default: &[f64]) -> Vec<f64> {
        self.array(
            || default.to_vec(),
            |node| match node {
                Node::Float(f) => Some(*f),
                _ => None,
            },
        )
    }

    pub fn string(&self, default: Option<&str>) -> String {
        match self.node() {
            Node::Absent => default.unwrap_or_default().to_string(),
            Node::String(s) => s.clone(),
            _ => String::new(),
        }
    }

    pub fn strings(&self, default: &[&str]) -> Vec<String> {
        self.array(
            || default.iter().map(|s| s.to_string()).collect(),
            |node| match node {
                Node::String(s) => Some(s.clone()),
                _ => None,
            },
        )
    }

    pub fn bool(&self, default: Option<bool>) -> bool {
        match self.node() {
            Node::Absent => default.unwrap_or_default(),
            Node::Bool(b) => *b,
            _ => false,
        }
    }

    /// Timestamp value. String nodes are parsed with `layout`, a chrono format
    /// string such as `"%Y-%m-%d"`; a parse failure yields [`zero_time`], and
    /// so does a bare TOML time of day, which names no instant.
    pub fn time(
        &self,
        layout: &str,
        default: Option<DateTime<FixedOffset>>,
    ) -> DateTime<FixedOffset> {
        match self.node() {
            Node::Absent => default.unwrap_or_else(zero_time),
            Node::Timestamp { at, .. } => at.unwrap_or_else(zero_time),
            Node::String(s) => parse_time(s, layout).unwrap_or_else(zero_time),
            _ => zero_time(),
        }
    }

    /// Children of a tree node; empty for anything else.
    pub fn map(&self) -> Tree {
        match self.node() {
            Node::Tree(tree) => tree.clone(),
            _ => Tree::new(),
        }
    }

    /// Deserialize a tree node into `dest`.
    ///
    /// An absent node leaves `dest` untouched and succeeds. `dest` is only
    /// overwritten when deserialization succeeds.
    ///
    /// TOML dates and times deserialize into [`toml::value::Datetime`] fields,
    /// which keep local dates and times of day as written. Convert to chrono
    /// afterwards, or read the field with [`EnvValue::time`].
    pub fn unmarshal<T: DeserializeOwned>(&self, dest: &mut T) -> Result<(), EnvError> {
        match self.node() {
            Node::Absent => Ok(()),
            Node::Tree(tree) => {
                // Through text so datetimes reach `Datetime` fields intact.
                let text = toml::to_string(&tree_to_table(tree))
                    .map_err(|e| EnvError::Encode(e.to_string()))?;
                *dest = toml::from_str(&text).map_err(EnvError::Deserialize)?;
                Ok(())
            }
            other => Err(EnvError::TypeMismatch {
                expected: NodeKind::Tree.as_str(),
                found: other.kind().as_str(),
            }),
        }
    }

    fn array<T>(
        &self,
        default: impl FnOnce() -> Vec<T>,
        coerce: impl Fn(&Node) -> Option<T>,
    ) -> Vec<T> {
        match self.node() {
            Node::Absent => default(),
            Node::Array(items) => items
                .iter()
                .map(coerce)
                .collect::<Option<Vec<T>>>()
                .unwrap_or_default(),
            _ => Vec::new(),
        }
    }
}

/// Offset-aware layouts first, then naive date-times as UTC, then dates at
/// UTC midnight.
fn parse_time(s: &str, layout: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(ts) = DateTime::parse_from_str(s, layout) {
        return Some(ts);
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, layout) {
        return Some(naive.and_utc().fixed_offset());
    }
    NaiveDate::parse_from_str(s, layout)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN).and_utc().fixed_offset())
}
