//! Density-scored cluster detection over detected communities.

use notegraph_algo::{detect_communities, group_by_community};
use notegraph_core::{Cluster, Graph};
use std::collections::{HashMap, HashSet};

/// Run community detection and describe every resulting community as a
/// [`Cluster`]: membership, size, edge density among members, and a label
/// derived from the most frequent member tags (ties broken alphabetically).
///
/// A fresh cluster set is computed on every call; nothing is cached or
/// mutated in place.
pub fn detect_clusters(graph: &Graph, max_passes: usize) -> Vec<Cluster> {
    let labels = detect_communities(graph, max_passes);
    let groups = group_by_community(graph, &labels);

    groups
        .into_iter()
        .enumerate()
        .map(|(id, members)| {
            let density = member_density(graph, &members);
            let label = dominant_tag_label(graph, &members).unwrap_or_else(|| format!("cluster-{id}"));
            Cluster {
                id,
                label,
                size: members.len(),
                density,
                members,
            }
        })
        .collect()
}

/// Realized edges among members divided by possible member pairs.
fn member_density(graph: &Graph, members: &[String]) -> f64 {
    if members.len() < 2 {
        return 0.0;
    }
    let member_set: HashSet<&str> = members.iter().map(String::as_str).collect();
    let realized = graph
        .edges
        .iter()
        .filter(|e| member_set.contains(e.source.as_str()) && member_set.contains(e.target.as_str()))
        .count();
    let possible = members.len() * (members.len() - 1) / 2;
    realized as f64 / possible as f64
}

/// Most frequent tag among member nodes; alphabetical on ties, `None`
/// when no member carries a tag.
fn dominant_tag_label(graph: &Graph, members: &[String]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for id in members {
        if let Some(node) = graph.node(id) {
            for tag in &node.tags {
                *counts.entry(tag.as_str()).or_insert(0) += 1;
            }
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(tag, _)| tag.to_string())
}
