//! Coverage-gap detection: topically isolated notes.

use notegraph_core::Graph;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A note flagged as under-connected relative to its content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageGap {
    pub node_id: String,
    /// Higher means more isolated; the ranked list is sorted on this
    pub isolation_score: f64,
    pub degree: usize,
    /// Tags this note carries that appear on no other node
    pub unique_tags: Vec<String>,
}

/// Rank every node by topical isolation.
///
/// The score combines low connectivity with high content volume (the
/// node's size hint encodes word count) and tags that appear nowhere else
/// in the graph. The full ranked list is returned, highest score first
/// with ties broken by node id; callers take the top-N slice they need.
pub fn coverage_gaps(graph: &Graph) -> Vec<CoverageGap> {
    let degrees = graph.degrees();

    // Tag frequency across the whole snapshot.
    let mut tag_counts: HashMap<&str, usize> = HashMap::new();
    for node in &graph.nodes {
        for tag in &node.tags {
            *tag_counts.entry(tag.as_str()).or_insert(0) += 1;
        }
    }

    let mut gaps: Vec<CoverageGap> = graph
        .nodes
        .iter()
        .map(|node| {
            let degree = degrees[node.id.as_str()];
            let unique_tags: Vec<String> = node
                .tags
                .iter()
                .filter(|t| tag_counts[t.as_str()] == 1)
                .cloned()
                .collect();
            // Content volume amplified by orphaned tags, damped by degree.
            let isolation_score =
                node.size * (1.0 + 0.5 * unique_tags.len() as f64) / (1.0 + degree as f64);
            CoverageGap {
                node_id: node.id.clone(),
                isolation_score,
                degree,
                unique_tags,
            }
        })
        .collect();

    gaps.sort_by(|a, b| {
        b.isolation_score
            .total_cmp(&a.isolation_score)
            .then_with(|| a.node_id.cmp(&b.node_id))
    });
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use notegraph_core::{EdgeKind, Graph, Node, Note};

    #[test]
    fn test_isolated_heavy_note_ranks_first() {
        let mut graph = Graph::new();
        let heavy = Note::new("tome", "tome", &"word ".repeat(2000));
        graph.add_node(Node::from_note(&heavy));
        for id in ["a", "b"] {
            graph.add_node(Node::from_note(&Note::new(id, id, "short")));
        }
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 5);

        let gaps = coverage_gaps(&graph);
        assert_eq!(gaps[0].node_id, "tome");
        assert_eq!(gaps[0].degree, 0);
    }

    #[test]
    fn test_unique_tags_detected() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(
            &Note::new("a", "a", "").with_tags(vec!["shared".into(), "only-here".into()]),
        ));
        graph.add_node(Node::from_note(
            &Note::new("b", "b", "").with_tags(vec!["shared".into()]),
        ));

        let gaps = coverage_gaps(&graph);
        let a = gaps.iter().find(|g| g.node_id == "a").unwrap();
        assert_eq!(a.unique_tags, vec!["only-here".to_string()]);
        let b = gaps.iter().find(|g| g.node_id == "b").unwrap();
        assert!(b.unique_tags.is_empty());
    }

    #[test]
    fn test_connectivity_dampens_score() {
        let mut graph = Graph::new();
        for id in ["hub", "x", "y", "z"] {
            graph.add_node(Node::from_note(&Note::new(id, id, "same length text")));
        }
        for leaf in ["x", "y", "z"] {
            graph.upsert_edge("hub", leaf, EdgeKind::Wikilink, 1);
        }

        let gaps = coverage_gaps(&graph);
        let hub_rank = gaps.iter().position(|g| g.node_id == "hub").unwrap();
        assert_eq!(hub_rank, gaps.len() - 1); // best-connected note is least of a gap
    }

    #[test]
    fn test_empty_graph_yields_empty_list() {
        assert!(coverage_gaps(&Graph::new()).is_empty());
    }
}
