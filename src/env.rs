//! Loaded configuration documents and key resolution.

use crate::error::EnvError;
use crate::key::parse_key;
use crate::node::{tree_from_table, Node, Tree};
use crate::value::EnvValue;
use std::path::Path;
use std::str::FromStr;

/// One parsed configuration document. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Env {
    root: Node,
}

impl Env {
    pub fn from_tree(tree: Tree) -> Self {
        Self {
            root: Node::Tree(tree),
        }
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EnvError> {
        std::str::from_utf8(bytes)?.parse()
    }

    /// Read and parse `path` as is. See [`crate::loader`] for the variant that
    /// creates missing files from the default template.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, EnvError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| EnvError::io(path, e))?;
        content.parse()
    }

    /// Resolve `key` to an accessor. Keys that do not resolve, including
    /// malformed ones, yield an absent accessor.
    pub fn get(&self, key: &str) -> EnvValue<'_> {
        match self.lookup(key) {
            Some(node) => EnvValue::new(node),
            None => EnvValue::new(&ABSENT),
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Top-level keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        self.root().keys().map(String::as_str).collect()
    }

    pub fn root(&self) -> &Tree {
        match &self.root {
            Node::Tree(tree) => tree,
            _ => &EMPTY_TREE,
        }
    }

    fn lookup(&self, key: &str) -> Option<&Node> {
        let segments = parse_key(key)?;
        let mut node = &self.root;
        for segment in &segments {
            node = match node {
                Node::Tree(tree) => tree.get(segment)?,
                // Arrays of tables resolve through their most recent entry.
                Node::Array(items) => match items.last()? {
                    Node::Tree(tree) => tree.get(segment)?,
                    _ => return None,
                },
                _ => return None,
            };
        }
        Some(node)
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::from_tree(Tree::new())
    }
}

static ABSENT: Node = Node::Absent;
static EMPTY_TREE: Tree = Tree::new();

impl FromStr for Env {
    type Err = EnvError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let table: toml::Table = s.parse().map_err(EnvError::Parse)?;
        Ok(Self::from_tree(tree_from_table(table)))
    }
}
