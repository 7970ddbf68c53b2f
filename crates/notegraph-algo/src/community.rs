//! Label-propagation community detection.

use notegraph_core::Graph;
use std::collections::HashMap;

/// Default cap on propagation passes.
pub const DEFAULT_MAX_PASSES: usize = 100;

/// Assign every node a community label by local majority propagation.
///
/// Every node starts in its own singleton community (labeled by its node
/// position). Each pass visits nodes in stored node order; a node adopts
/// the most frequent label among its neighbors, with ties resolved in
/// favor of keeping the current label — that bias is what guarantees
/// stabilization. Propagation stops when a full pass changes nothing or
/// after `max_passes`, whichever comes first.
///
/// Heuristic grouping, not an optimal-modularity solver. Deterministic for
/// a fixed node and edge order. Once stabilized, further passes are
/// no-ops.
pub fn detect_communities(graph: &Graph, max_passes: usize) -> HashMap<String, usize> {
    let ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    let mut labels: HashMap<&str, usize> = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
    let adjacency = graph.adjacency();

    let mut passes = 0;
    for _ in 0..max_passes.max(1) {
        passes += 1;
        let mut changed = false;
        for &id in &ids {
            let neighbors = &adjacency[id];
            if neighbors.is_empty() {
                continue;
            }

            let mut frequency: HashMap<usize, usize> = HashMap::new();
            for &neighbor in neighbors {
                *frequency.entry(labels[neighbor]).or_insert(0) += 1;
            }

            let current = labels[id];
            let Some(&best_count) = frequency.values().max() else {
                continue;
            };
            // Keep the current label on ties; otherwise take the smallest
            // winning label so the outcome is order-independent.
            if frequency.get(&current) == Some(&best_count) {
                continue;
            }
            let best = frequency
                .iter()
                .filter(|&(_, &count)| count == best_count)
                .map(|(&label, _)| label)
                .min()
                .unwrap_or(current);
            if best != current {
                labels.insert(id, best);
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }
    log::debug!("label propagation ran {passes} passes over {} nodes", ids.len());

    labels
        .into_iter()
        .map(|(id, label)| (id.to_string(), label))
        .collect()
}

/// Group a label assignment into member lists, ordered by first appearance
/// in the graph's node order.
pub fn group_by_community(graph: &Graph, labels: &HashMap<String, usize>) -> Vec<Vec<String>> {
    let mut groups: Vec<(usize, Vec<String>)> = Vec::new();
    for node in &graph.nodes {
        let label = labels[&node.id];
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, members)) => members.push(node.id.clone()),
            None => groups.push((label, vec![node.id.clone()])),
        }
    }
    groups.into_iter().map(|(_, members)| members).collect()
}
