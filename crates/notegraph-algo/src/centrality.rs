//! Pair-normalized betweenness centrality.

use crate::paths::all_shortest_paths;
use notegraph_core::Graph;
use std::collections::HashMap;

/// Betweenness centrality for every node.
///
/// For every unordered node pair, every shortest path between them is
/// enumerated; each strictly-intermediate node on any such path receives
/// `1 / (number of shortest paths for that pair)`. Endpoints never receive
/// credit for their own pair, so degree-0 nodes and the endpoints of a
/// two-node graph score exactly zero.
///
/// This enumerates O(V²) pairs with a BFS each — route corpus-scale graphs
/// through the offload worker instead of calling it inline.
pub fn betweenness_centrality(graph: &Graph) -> HashMap<String, f64> {
    let mut scores: HashMap<String, f64> =
        graph.nodes.iter().map(|n| (n.id.clone(), 0.0)).collect();

    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    for (i, &source) in ids.iter().enumerate() {
        for &target in ids.iter().skip(i + 1) {
            let paths = all_shortest_paths(graph, source, target);
            if paths.is_empty() {
                continue;
            }
            let credit = 1.0 / paths.len() as f64;
            for path in &paths {
                for intermediate in &path[1..path.len() - 1] {
                    if let Some(score) = scores.get_mut(intermediate) {
                        *score += credit;
                    }
                }
            }
        }
    }

    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::{EdgeKind, Graph, Node, Note};

    fn graph_with(ids: &[&str], edges: &[(&str, &str)]) -> Graph {
        let mut graph = Graph::new();
        for id in ids {
            graph.add_node(Node::from_note(&Note::new(id, *id, "")));
        }
        for (a, b) in edges {
            graph.upsert_edge(a, b, EdgeKind::Wikilink, 1);
        }
        graph
    }

    #[test]
    fn test_two_node_graph_scores_zero() {
        let graph = graph_with(&["a", "b"], &[("a", "b")]);
        let scores = betweenness_centrality(&graph);
        assert_eq!(scores["a"], 0.0);
        assert_eq!(scores["b"], 0.0);
    }

    #[test]
    fn test_chain_center_scores_highest() {
        let graph = graph_with(
            &["a", "b", "c", "d", "e"],
            &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")],
        );
        let scores = betweenness_centrality(&graph);

        assert_eq!(scores["c"], 4.0);
        assert_eq!(scores["b"], 3.0);
        assert_eq!(scores["d"], 3.0);
        assert_eq!(scores["a"], 0.0);
        assert_eq!(scores["e"], 0.0);
    }

    #[test]
    fn test_star_hub_credits_all_leaf_pairs() {
        let leaves: Vec<String> = (0..10).map(|i| format!("leaf{i}")).collect();
        let mut ids = vec!["hub"];
        ids.extend(leaves.iter().map(|s| s.as_str()));
        let edges: Vec<(&str, &str)> = leaves.iter().map(|l| ("hub", l.as_str())).collect();
        let graph = graph_with(&ids, &edges);

        let scores = betweenness_centrality(&graph);
        assert_eq!(scores["hub"], 45.0); // C(10, 2) leaf pairs
        for leaf in &leaves {
            assert_eq!(scores[leaf.as_str()], 0.0);
        }
    }

    #[test]
    fn test_split_credit_between_equal_paths() {
        // Diamond: both b and c sit on one of the two shortest a-d paths.
        let graph = graph_with(
            &["a", "b", "c", "d"],
            &[("a", "b"), ("a", "c"), ("b", "d"), ("c", "d")],
        );
        let scores = betweenness_centrality(&graph);
        assert!((scores["b"] - 0.5).abs() < 1e-12);
        assert!((scores["c"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_scores_non_negative_and_orphans_zero() {
        let graph = graph_with(&["a", "b", "c", "loner"], &[("a", "b"), ("b", "c")]);
        let scores = betweenness_centrality(&graph);
        assert_eq!(scores["loner"], 0.0);
        assert!(scores.values().all(|&s| s >= 0.0));
    }
}
