//! Pairwise connection-strength aggregation.

use notegraph_core::Graph;
use std::collections::HashMap;

/// For every node, the summed edge weight to each of its neighbors.
///
/// Parallel edges of different kinds between the same pair (a wikilink and
/// a shared tag, say) sum into a single strength value. Purely a weighted
/// adjacency materialization; it lives here because callers treat it as
/// part of the same algorithm family and offload path.
pub fn connection_heatmap(graph: &Graph) -> HashMap<String, HashMap<String, u32>> {
    let mut heatmap: HashMap<String, HashMap<String, u32>> = graph
        .nodes
        .iter()
        .map(|n| (n.id.clone(), HashMap::new()))
        .collect();

    for edge in &graph.edges {
        if let Some(row) = heatmap.get_mut(&edge.source) {
            *row.entry(edge.target.clone()).or_insert(0) += edge.weight;
        }
        if let Some(row) = heatmap.get_mut(&edge.target) {
            *row.entry(edge.source.clone()).or_insert(0) += edge.weight;
        }
    }

    heatmap
}
