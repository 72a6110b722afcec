//! Core data structures for the repository graph

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique, stable identifier for a node.
///
/// Identities are derived from the node kind and the absolute path
/// (`dir:<path>` / `file:<path>`), so a directory and a file at the same
/// path never collide and repeated analysis of an unchanged tree yields
/// identical identities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    /// Identity for a directory node.
    pub fn dir(path: &Path) -> Self {
        NodeId(format!("dir:{}", path.display()))
    }

    /// Identity for a file node.
    pub fn file(path: &Path) -> Self {
        NodeId(format!("file:{}", path.display()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Discriminates what a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Dir,
    File,
}

/// A single node in the repository graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub kind: NodeKind,
    /// Path relative to the analysis root, forward-slash separated.
    /// The root itself is labeled `.`.
    pub label: String,
    /// Absolute path on disk; present for file nodes only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// What kind of relationship an edge represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeKind {
    /// Parent-to-child containment in the directory tree.
    Child,
    /// Source-level import dependency between two files.
    Imports,
}

/// A directed edge in the repository graph.
///
/// Edges are not deduplicated: multiple import statements between the same
/// two files produce multiple edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
}

/// Metadata attached to one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    /// File name of the analyzed root directory.
    pub repo: String,
    /// RFC 3339 generation timestamp.
    pub generated_at: DateTime<Utc>,
    pub file_count: usize,
    pub dir_count: usize,
}

/// The immutable result of one analysis invocation.
///
/// Nodes are ordered by identity (directories first, each group sorted by
/// absolute path); edges are in emission order. Constructed once per run and
/// handed to callers as a plain value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub meta: Meta,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}
