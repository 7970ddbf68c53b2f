//! Bridge-note detection: nodes whose removal weakens graph structure.

use crate::components::connected_components;
use notegraph_algo::betweenness_centrality;
use notegraph_core::Graph;
use serde::{Deserialize, Serialize};

/// A node ranked by structural cut importance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeNote {
    pub node_id: String,
    /// Whether removing this node increases the component count
    pub disconnects: bool,
    pub betweenness: f64,
    pub degree: usize,
    /// Ranking score: betweenness-to-degree ratio, boosted for true cuts
    pub score: f64,
}

/// Rank nodes by how much the graph depends on them structurally.
///
/// A node is a bridge when removing it splits a connected component, or
/// when its betweenness centrality is disproportionately high for its
/// degree (a cut proxy that avoids a dedicated articulation-point pass).
/// The full ranked list is returned, strongest bridge first with ties
/// broken by node id; callers truncate to taste.
pub fn bridge_notes(graph: &Graph) -> Vec<BridgeNote> {
    let betweenness = betweenness_centrality(graph);
    let degrees = graph.degrees();
    let baseline_components = connected_components(graph, None).len();

    let mut bridges: Vec<BridgeNote> = graph
        .nodes
        .iter()
        .map(|node| {
            let id = node.id.as_str();
            let degree = degrees[id];
            let centrality = betweenness[id];
            // Degree-0 nodes cannot disconnect anything; skip the rebuild.
            let disconnects = degree > 0
                && connected_components(graph, Some(id)).len() > baseline_components;
            let ratio = centrality / (degree.max(1)) as f64;
            let score = if disconnects { ratio + centrality } else { ratio };
            BridgeNote {
                node_id: node.id.clone(),
                disconnects,
                betweenness: centrality,
                degree,
                score,
            }
        })
        .collect();

    bridges.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.node_id.cmp(&b.node_id))
    });
    bridges
}
