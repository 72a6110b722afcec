//! Repograph Core — graph data model and the serialized analysis result

pub mod graph;
pub mod model;


pub use graph::RepoGraph;
pub use model::{AnalysisResult, Edge, EdgeKind, Meta, Node, NodeId, NodeKind};
