//! Graph wrapper using petgraph::StableDiGraph keyed by string NodeId

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::stable_graph::{NodeIndex, StableDiGraph};

use crate::model::{AnalysisResult, Edge, EdgeKind, Meta, Node, NodeId, NodeKind};

/// The repository graph — a directed multigraph of directory and file nodes.
///
/// Node and edge iteration follow insertion order, so a builder that inserts
/// nodes in sorted order gets a deterministic result out. `add_edge` refuses
/// edges whose endpoints are unknown, which keeps the invariant that every
/// edge references a node present in the graph.
pub struct RepoGraph {
    inner: StableDiGraph<Node, EdgeKind>,
    index: HashMap<NodeId, NodeIndex>,
}

impl std::fmt::Debug for RepoGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepoGraph")
            .field("node_count", &self.inner.node_count())
            .field("edge_count", &self.inner.edge_count())
            .finish()
    }
}

impl RepoGraph {
    pub fn new() -> Self {
        RepoGraph {
            inner: StableDiGraph::new(),
            index: HashMap::new(),
        }
    }

    /// Add a node. Returns false (keeping the existing node) if the identity
    /// is already present.
    pub fn add_node(&mut self, node: Node) -> bool {
        if self.index.contains_key(&node.id) {
            return false;
        }
        let id = node.id.clone();
        let idx = self.inner.add_node(node);
        self.index.insert(id, idx);
        true
    }

    /// Add an edge between two existing nodes. Returns false if either
    /// endpoint is unknown. Parallel edges are allowed.
    pub fn add_edge(&mut self, from: &NodeId, to: &NodeId, kind: EdgeKind) -> bool {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from_idx), Some(&to_idx)) => {
                self.inner.add_edge(from_idx, to_idx, kind);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, id: &NodeId) -> bool {
        self.index.contains_key(id)
    }

    /// Get a node by identity.
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.index.get(id).and_then(|&idx| self.inner.node_weight(idx))
    }

    pub fn node_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Iterate over all nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.inner
            .node_indices()
            .filter_map(move |idx| self.inner.node_weight(idx))
    }

    /// Iterate over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.inner.edge_indices().filter_map(move |idx| {
            let (from, to) = self.inner.edge_endpoints(idx)?;
            let kind = *self.inner.edge_weight(idx)?;
            Some(Edge {
                from: self.inner[from].id.clone(),
                to: self.inner[to].id.clone(),
                kind,
            })
        })
    }

    /// Number of incoming edges of a given kind.
    pub fn in_degree(&self, id: &NodeId, kind: EdgeKind) -> usize {
        let Some(&idx) = self.index.get(id) else {
            return 0;
        };
        self.inner
            .edges_directed(idx, Direction::Incoming)
            .filter(|edge_ref| *edge_ref.weight() == kind)
            .count()
    }

    /// Number of nodes of a given kind.
    pub fn kind_count(&self, kind: NodeKind) -> usize {
        self.nodes().filter(|node| node.kind == kind).count()
    }

    /// Consume the graph into the immutable analysis result.
    pub fn into_result(self, meta: Meta) -> AnalysisResult {
        let edges: Vec<Edge> = self.edges().collect();
        let nodes: Vec<Node> = self.nodes().cloned().collect();
        AnalysisResult { meta, nodes, edges }
    }
}

impl Default for RepoGraph {
    fn default() -> Self {
        Self::new()
    }
}
