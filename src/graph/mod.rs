//! Node graphs built from adjacency descriptions, and centrality ranking

pub mod algorithms;
pub mod builder;

pub use algorithms::{betweenness_centrality, rank_by_betweenness, rank_json};
pub use builder::{Adjacency, GraphBuilder};

use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Undirected graph whose nodes carry their string identifiers
#[derive(Debug, Clone, Default)]
pub struct NodeGraph {
    /// Underlying petgraph graph; node weights are the identifiers
    pub graph: UnGraph<String, ()>,

    /// Identifier to node index
    pub index: HashMap<String, NodeIndex>,
}

impl NodeGraph {
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Identifier of the node at `idx`
    pub fn node_id(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// Whether an edge joins the two identified nodes
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(&ia), Some(&ib)) => self.graph.find_edge(ia, ib).is_some(),
            _ => false,
        }
    }
}
