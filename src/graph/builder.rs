//! Graph construction from adjacency descriptions

use crate::error::{Error, Result};
use crate::graph::NodeGraph;
use petgraph::graph::{NodeIndex, UnGraph};
use serde_json::Value;
use std::collections::HashMap;

/// Neighbour lists keyed by node identifier.
///
/// The JSON form is an object mapping each node to an array of neighbours,
/// e.g. `{"0": [1, 2], "1": [0], "2": [0]}`. Identifiers may be strings or
/// numbers; numbers are kept in their JSON spelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Adjacency {
    pub entries: Vec<(String, Vec<String>)>,
}

fn node_id(value: &Value, owner: &str) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(Error::parse(
            0,
            format!("neighbour of '{owner}' must be a string or number, got {other}"),
        )),
    }
}

impl Adjacency {
    /// Parse the JSON object form
    pub fn from_json(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        let object = value
            .as_object()
            .ok_or_else(|| Error::parse(0, "adjacency must be a JSON object"))?;

        let mut entries = Vec::with_capacity(object.len());
        for (node, neighbours) in object {
            let neighbours = neighbours.as_array().ok_or_else(|| {
                Error::parse(0, format!("neighbours of '{node}' must be an array"))
            })?;
            let neighbours = neighbours
                .iter()
                .map(|n| node_id(n, node))
                .collect::<Result<Vec<_>>>()?;
            entries.push((node.clone(), neighbours));
        }

        Ok(Self { entries })
    }

    /// Build from in-memory neighbour lists
    pub fn from_lists<I, N, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = lists
            .into_iter()
            .map(|(node, neighbours)| {
                let neighbours = neighbours.into_iter().map(Into::into).collect();
                (node.into(), neighbours)
            })
            .collect();
        Self { entries }
    }

    /// Build the undirected graph this adjacency describes
    pub fn to_graph(&self) -> NodeGraph {
        let mut builder = GraphBuilder::with_capacity(self.entries.len());
        for (node, neighbours) in &self.entries {
            builder.get_or_create_node(node);
            for neighbour in neighbours {
                builder.add_edge(node, neighbour);
            }
        }
        builder.build()
    }
}

/// Builder for incrementally constructing a [`NodeGraph`]
pub struct GraphBuilder {
    /// Mapping from string IDs to node indices
    id_to_index: HashMap<String, NodeIndex>,

    graph: UnGraph<String, ()>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            graph: UnGraph::with_capacity(capacity, capacity),
        }
    }

    /// Get or create the node for the given string ID
    pub fn get_or_create_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }

        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    /// Join two nodes. Self-loops and repeated edges are ignored.
    pub fn add_edge(&mut self, a: &str, b: &str) {
        let ia = self.get_or_create_node(a);
        let ib = self.get_or_create_node(b);
        if ia != ib {
            self.graph.update_edge(ia, ib, ());
        }
    }

    pub fn build(self) -> NodeGraph {
        NodeGraph {
            graph: self.graph,
            index: self.id_to_index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_numbers_and_strings() {
        let adjacency = Adjacency::from_json(r#"{"0": [1, "2"], "1": [0]}"#).unwrap();
        assert_eq!(
            adjacency.entries,
            vec![
                ("0".to_string(), vec!["1".to_string(), "2".to_string()]),
                ("1".to_string(), vec!["0".to_string()]),
            ]
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(matches!(Adjacency::from_json("[1, 2]"), Err(Error::Parse { .. })));
        assert!(matches!(
            Adjacency::from_json(r#"{"a": "b"}"#),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(
            Adjacency::from_json(r#"{"a": [null]}"#),
            Err(Error::Parse { .. })
        ));
        assert!(matches!(Adjacency::from_json("{"), Err(Error::Json(_))));
    }

    #[test]
    fn test_graph_deduplicates_edges() {
        let adjacency = Adjacency::from_lists([
            ("a", vec!["b", "c", "a"]),
            ("b", vec!["a"]),
            ("c", vec!["a"]),
            ("d", vec![]),
        ]);
        let graph = adjacency.to_graph();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.has_edge("b", "a"));
        assert!(!graph.has_edge("b", "c"));
    }
}
