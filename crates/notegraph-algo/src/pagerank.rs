//! Damped, fixed-iteration PageRank over the directed edge orientation.

use notegraph_core::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// PageRank parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRankParams {
    /// Damping factor; values outside (0, 1) fall back to 0.85
    pub damping: f64,
    /// Fixed iteration count; no convergence tolerance is applied
    pub iterations: usize,
}

impl Default for PageRankParams {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 100,
        }
    }
}

impl PageRankParams {
    /// Damping clamped into the valid open interval.
    pub fn effective_damping(&self) -> f64 {
        if self.damping > 0.0 && self.damping < 1.0 {
            self.damping
        } else {
            0.85
        }
    }
}

/// Iterative link-authority score per node.
///
/// Edges are followed in their stored orientation (source to target) even
/// though other algorithms treat the graph as undirected — link-following
/// semantics are deliberately asymmetric here. A node with no outgoing
/// edges redistributes nothing: its damped mass leaves the system, so rank
/// sums fall below 1.0 on graphs with dangling nodes. That deviation is
/// intentional and covered by tests; redistributing dangling mass is a
/// possible future change, not a bug fix to slip in.
pub fn pagerank(graph: &Graph, params: &PageRankParams) -> HashMap<String, f64> {
    let n = graph.node_count();
    if n == 0 {
        return HashMap::new();
    }

    let damping = params.effective_damping();
    let out = graph.directed_adjacency();
    let ids: Vec<&str> = graph.nodes.iter().map(|node| node.id.as_str()).collect();

    let initial = 1.0 / n as f64;
    let mut scores: HashMap<&str, f64> = ids.iter().map(|&id| (id, initial)).collect();

    for _ in 0..params.iterations {
        let base = (1.0 - damping) / n as f64;
        let mut next: HashMap<&str, f64> = ids.iter().map(|&id| (id, base)).collect();
        for &id in &ids {
            let targets = &out[id];
            if targets.is_empty() {
                continue; // dangling: mass is not redistributed
            }
            let share = damping * scores[id] / targets.len() as f64;
            for &target in targets {
                if let Some(score) = next.get_mut(target) {
                    *score += share;
                }
            }
        }
        scores = next;
    }

    scores
        .into_iter()
        .map(|(id, score)| (id.to_string(), score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::{EdgeKind, Graph, Node, Note};

    fn nodes(ids: &[&str]) -> Graph {
        let mut graph = Graph::new();
        for id in ids {
            graph.add_node(Node::from_note(&Note::new(id, *id, "")));
        }
        graph
    }

    /// Both orientations between a pair, as the builder produces for
    /// mutually-linked notes.
    fn link_both(graph: &mut Graph, a: &str, b: &str) {
        graph.upsert_edge(a, b, EdgeKind::Wikilink, 1);
        graph.upsert_edge(b, a, EdgeKind::Backlink, 1);
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::new();
        assert!(pagerank(&graph, &PageRankParams::default()).is_empty());
    }

    #[test]
    fn test_sums_to_one_without_dangling_nodes() {
        // Directed cycle: every node has an outgoing edge.
        let mut graph = nodes(&["a", "b", "c"]);
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);
        graph.upsert_edge("b", "c", EdgeKind::Wikilink, 1);
        graph.upsert_edge("c", "a", EdgeKind::Wikilink, 1);

        for iterations in [1, 10, 100] {
            let scores = pagerank(
                &graph,
                &PageRankParams {
                    damping: 0.85,
                    iterations,
                },
            );
            let sum: f64 = scores.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum {sum} after {iterations}");
        }
    }

    #[test]
    fn test_dangling_nodes_leak_mass() {
        // a -> b with no way back: b's mass leaves the system.
        let mut graph = nodes(&["a", "b"]);
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);

        let scores = pagerank(&graph, &PageRankParams::default());
        let sum: f64 = scores.values().sum();
        assert!(sum < 1.0 - 1e-6, "expected leaked mass, sum was {sum}");
    }

    #[test]
    fn test_chain_ranks_interior_above_endpoints() {
        // Mutually-linked chain a-b-c-d-e.
        let mut graph = nodes(&["a", "b", "c", "d", "e"]);
        for pair in [("a", "b"), ("b", "c"), ("c", "d"), ("d", "e")] {
            link_both(&mut graph, pair.0, pair.1);
        }

        let scores = pagerank(&graph, &PageRankParams::default());
        for interior in ["b", "c", "d"] {
            assert!(scores[interior] > scores["a"]);
            assert!(scores[interior] > scores["e"]);
        }
        // Mirror symmetry: b and d are interchangeable, as are a and e.
        assert!((scores["b"] - scores["d"]).abs() < 1e-9);
        assert!((scores["a"] - scores["e"]).abs() < 1e-9);
        // Endpoints donate their whole rank to their only neighbor, so the
        // leaf-adjacent nodes edge out the exact middle slightly.
        assert!(scores["b"] > scores["c"]);
        assert!((scores["b"] - scores["c"]).abs() < 0.02);
    }

    #[test]
    fn test_invalid_damping_falls_back() {
        let mut graph = nodes(&["a", "b"]);
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);

        let bad = pagerank(
            &graph,
            &PageRankParams {
                damping: -2.0,
                iterations: 10,
            },
        );
        let good = pagerank(
            &graph,
            &PageRankParams {
                damping: 0.85,
                iterations: 10,
            },
        );
        assert_eq!(bad, good);
    }

    #[test]
    fn test_deterministic() {
        let mut graph = nodes(&["a", "b", "c"]);
        link_both(&mut graph, "a", "b");
        link_both(&mut graph, "b", "c");

        let first = pagerank(&graph, &PageRankParams::default());
        let second = pagerank(&graph, &PageRankParams::default());
        assert_eq!(first, second);
    }
}
