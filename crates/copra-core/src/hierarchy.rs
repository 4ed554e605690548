//! Flat node list plus the nested tree built from node paths.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::{last_segment, split_path};
use crate::{Error, Result};

/// One discovered object in the design hierarchy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Dot-separated path from the design root, unique per node.
    pub path: String,
    /// Last path segment. Filled from `path` when absent in a dump.
    #[serde(default)]
    pub name: String,
    /// Runtime handle kind, e.g. `cocotb.handle.LogicObject`.
    #[serde(default, alias = "py_type")]
    pub type_tag: Option<String>,
    /// Bit width, meaningful only for vector leaves.
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub is_scope: bool,
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(path: impl Into<String>, type_tag: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            name: last_segment(&path).to_string(),
            path,
            type_tag: Some(type_tag.into()),
            width: None,
            is_scope: false,
        }
    }

    /// Create a scope node.
    pub fn scope(path: impl Into<String>, type_tag: impl Into<String>) -> Self {
        Self {
            is_scope: true,
            ..Self::leaf(path, type_tag)
        }
    }

    /// Set the bit width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn type_tag(&self) -> Option<&str> {
        self.type_tag.as_deref()
    }
}

/// Children of a tree entry, keyed by path segment in insertion order.
pub type Children = IndexMap<String, TreeEntry>;

/// One level of the hierarchy tree.
///
/// `node` is `None` for intermediate entries that were implied by a
/// descendant's path but never reported themselves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeEntry {
    node: Option<Node>,
    children: Children,
}

impl TreeEntry {
    pub fn node(&self) -> Option<&Node> {
        self.node.as_ref()
    }

    pub fn children(&self) -> &Children {
        &self.children
    }
}

/// A discovered design hierarchy.
#[derive(Clone, Debug, Default)]
pub struct Hierarchy {
    /// Flat layer keyed by path, first-insertion order.
    nodes: IndexMap<String, Node>,
    roots: Children,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Nodes(Vec<Node>),
    Wrapped { nodes: Vec<Node> },
}

impl Hierarchy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_nodes(nodes: impl IntoIterator<Item = Node>) -> Self {
        let mut hierarchy = Self::new();
        for node in nodes {
            hierarchy.insert(node);
        }
        hierarchy
    }

    /// Parse a JSON dump: either a bare array of nodes or `{ "nodes": [...] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        let nodes = match serde_json::from_str(json)? {
            Document::Nodes(nodes) | Document::Wrapped { nodes } => nodes,
        };
        Ok(Self::from_nodes(nodes))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Add a node, creating node-less intermediate entries as needed.
    ///
    /// Nodes with an empty path are ignored. Re-inserting a path replaces
    /// the node in both the flat and the tree layer, keeping its position
    /// and the children already collected under it.
    pub fn insert(&mut self, mut node: Node) {
        if node.path.is_empty() {
            return;
        }

        let segments = split_path(&node.path);
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut level = &mut self.roots;
        for segment in parents {
            level = &mut level.entry(segment.to_string()).or_default().children;
        }
        let entry = level.entry(last.to_string()).or_default();

        if node.name.is_empty() {
            node.name = last.to_string();
        }
        entry.node = Some(node.clone());
        self.nodes.insert(node.path.clone(), node);
    }

    /// All nodes in insertion order, one per path.
    pub fn nodes(&self) -> impl ExactSizeIterator<Item = &Node> {
        self.nodes.values()
    }

    pub fn node(&self, path: &str) -> Option<&Node> {
        self.nodes.get(path)
    }

    /// All top-level entries. A well-formed hierarchy has exactly one.
    pub fn roots(&self) -> &Children {
        &self.roots
    }

    /// The design root: the first top-level entry.
    pub fn root(&self) -> Option<(&str, &TreeEntry)> {
        self.roots
            .first()
            .map(|(name, entry)| (name.as_str(), entry))
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }
}
