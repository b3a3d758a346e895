//! Centrality ranking over node graphs

use crate::error::Result;
use crate::graph::{Adjacency, NodeGraph};
use rustworkx_core::centrality;
use std::cmp::Ordering;

/// Graphs with at least this many nodes compute centrality in parallel
const PARALLEL_THRESHOLD: usize = 50;

/// Normalized betweenness centrality of every node, in node insertion order
pub fn betweenness_centrality(graph: &NodeGraph) -> Vec<(String, f64)> {
    log::debug!(
        "Computing betweenness centrality for {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let scores =
        centrality::betweenness_centrality(&graph.graph, false, true, PARALLEL_THRESHOLD);

    graph
        .graph
        .node_indices()
        .map(|idx| {
            let score = scores.get(idx.index()).copied().flatten().unwrap_or(0.0);
            (graph.node_id(idx).to_string(), score)
        })
        .collect()
}

/// Identifier order: numerically when both are integers, otherwise by text
fn compare_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        _ => a.cmp(b),
    }
}

/// Node identifiers ordered by descending betweenness centrality.
///
/// Ties are broken by identifier so the ranking is reproducible. Integer
/// identifiers compare numerically, so `2` ranks before `10`.
pub fn rank_by_betweenness(adjacency: &Adjacency) -> Vec<String> {
    let graph = adjacency.to_graph();
    let mut scored = betweenness_centrality(&graph);

    scored.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| compare_ids(&a.0, &b.0)));

    log::info!("Ranked {} nodes by betweenness centrality", scored.len());
    scored.into_iter().map(|(id, _)| id).collect()
}

/// Parse a JSON adjacency object and rank its nodes by betweenness
pub fn rank_json(text: &str) -> Result<Vec<String>> {
    Ok(rank_by_betweenness(&Adjacency::from_json(text)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_graph_center_first() {
        let ranking = rank_json(r#"{"a": ["b"], "b": ["a", "c"], "c": ["b"]}"#).unwrap();
        assert_eq!(ranking, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_star_graph_scores() {
        let adjacency = Adjacency::from_lists([
            ("hub", vec!["x", "y", "z"]),
            ("x", vec![]),
            ("y", vec![]),
            ("z", vec![]),
        ]);
        let scores = betweenness_centrality(&adjacency.to_graph());

        // hub lies on every leaf-to-leaf shortest path
        assert_eq!(scores[0].0, "hub");
        assert!(scores[0].1 > 0.0);
        assert!(scores[1..].iter().all(|(_, s)| *s == 0.0));
    }

    #[test]
    fn test_chain_ranking() {
        // 1 - 2 - 3 - 4 - 5: the middle node carries the most paths
        let adjacency =
            Adjacency::from_json(r#"{"1": [2], "2": [1, 3], "3": [2, 4], "4": [3, 5], "5": [4]}"#)
                .unwrap();
        let ranking = rank_by_betweenness(&adjacency);
        assert_eq!(ranking, vec!["3", "2", "4", "1", "5"]);
    }

    #[test]
    fn test_integer_ids_tie_numerically() {
        let ranking = rank_json(r#"{"2": [], "10": [], "9": []}"#).unwrap();
        assert_eq!(ranking, vec!["2", "9", "10"]);

        assert_eq!(compare_ids("b", "10"), Ordering::Greater);
        assert_eq!(compare_ids("07", "7"), Ordering::Less);
    }

    #[test]
    fn test_rank_json_rejects_malformed() {
        assert!(rank_json(r#"{"a": 3}"#).is_err());
    }

    #[test]
    fn test_empty_adjacency() {
        let ranking = rank_by_betweenness(&Adjacency::default());
        assert!(ranking.is_empty());
    }
}
