//! Graph construction: directory/file nodes and hierarchy edges

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use repograph_core::{EdgeKind, Node, NodeId, NodeKind, RepoGraph};

use crate::config::AnalyzerConfig;
use crate::traverser::Traversal;

/// Files eligible for graph nodes, sorted lexicographically by absolute path.
///
/// The sort key is the raw OS string, byte order, which is the explicit
/// tie-break for node emission everywhere in the pipeline.
pub fn code_files(traversal: &Traversal, config: &AnalyzerConfig) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = traversal
        .files
        .iter()
        .filter(|path| config.is_code_file(path))
        .cloned()
        .collect();
    files.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
    files
}

/// Emit directory nodes, file nodes, and hierarchy edges.
///
/// Directories come first, then files, each group in path order; that
/// ordering carries no semantic weight but makes repeated runs identical.
pub fn build_hierarchy(root: &Path, dirs: &HashSet<PathBuf>, files: &[PathBuf]) -> RepoGraph {
    let mut graph = RepoGraph::new();

    let mut dirs: Vec<&PathBuf> = dirs.iter().collect();
    dirs.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));

    for dir in &dirs {
        graph.add_node(Node {
            id: NodeId::dir(dir),
            kind: NodeKind::Dir,
            label: relative_label(root, dir),
            file: None,
        });
    }

    for file in files {
        graph.add_node(Node {
            id: NodeId::file(file),
            kind: NodeKind::File,
            label: relative_label(root, file),
            file: Some(file.clone()),
        });
    }

    // Containment edges. The root itself has no parent edge, so its
    // hierarchy in-degree is zero.
    for dir in &dirs {
        if dir.as_path() == root {
            continue;
        }
        if let Some(parent) = dir.parent() {
            if parent.starts_with(root) {
                graph.add_edge(&NodeId::dir(parent), &NodeId::dir(dir), EdgeKind::Child);
            }
        }
    }

    for file in files {
        if let Some(parent) = file.parent() {
            if parent.starts_with(root) {
                graph.add_edge(&NodeId::dir(parent), &NodeId::file(file), EdgeKind::Child);
            }
        }
    }

    graph
}

/// Root-relative display label, forward-slash separated; `.` for the root.
pub fn relative_label(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/"),
        _ => ".".to_string(),
    }
}
