//! Corpus-wide health metrics.

use crate::components::connected_components;
use notegraph_algo::bfs_distances;
use notegraph_core::Graph;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fixed sampling seed so repeated calls on the same graph agree.
const SAMPLE_SEED: u64 = 0x6e6f_7465;

/// Default number of random pairs sampled for path-length estimates.
pub const DEFAULT_SAMPLE_PAIRS: usize = 200;

/// Scalar summary of a graph snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub average_degree: f64,
    /// Fraction of zero-degree nodes
    pub orphan_ratio: f64,
    /// Fraction of nodes inside the largest connected component
    pub connectivity_ratio: f64,
    /// Mean shortest-path hop count over the sampled reachable pairs
    pub average_path_length: f64,
    /// Median shortest-path hop count over the sampled reachable pairs
    pub median_path_length: f64,
    /// Reachable pairs that actually contributed to the estimates
    pub sampled_pairs: usize,
}

/// Compute corpus-wide health metrics.
///
/// Path lengths are estimated from at most `sample_pairs` random node
/// pairs rather than an exhaustive all-pairs sweep. Sampling uses a fixed
/// seed: the same graph and sample size always produce the same report.
pub fn health_metrics(graph: &Graph, sample_pairs: usize) -> HealthReport {
    let total_nodes = graph.node_count();
    let total_edges = graph.edge_count();

    if total_nodes == 0 {
        return HealthReport {
            total_nodes: 0,
            total_edges: 0,
            average_degree: 0.0,
            orphan_ratio: 0.0,
            connectivity_ratio: 0.0,
            average_path_length: 0.0,
            median_path_length: 0.0,
            sampled_pairs: 0,
        };
    }

    let degrees = graph.degrees();
    let orphans = degrees.values().filter(|&&d| d == 0).count();
    let average_degree = degrees.values().sum::<usize>() as f64 / total_nodes as f64;

    let components = connected_components(graph, None);
    let largest = components.iter().map(Vec::len).max().unwrap_or(0);
    let connectivity_ratio = largest as f64 / total_nodes as f64;

    let (average_path_length, median_path_length, sampled) =
        sample_path_lengths(graph, sample_pairs);

    HealthReport {
        total_nodes,
        total_edges,
        average_degree,
        orphan_ratio: orphans as f64 / total_nodes as f64,
        connectivity_ratio,
        average_path_length,
        median_path_length,
        sampled_pairs: sampled,
    }
}

/// Sample up to `sample_pairs` distinct random pairs and measure their BFS
/// distances, reusing distance maps per sampled source. Unreachable pairs
/// are skipped.
fn sample_path_lengths(graph: &Graph, sample_pairs: usize) -> (f64, f64, usize) {
    let n = graph.node_count();
    if n < 2 || sample_pairs == 0 {
        return (0.0, 0.0, 0);
    }

    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED ^ sample_pairs as u64);
    let mut distance_cache: HashMap<usize, HashMap<String, usize>> = HashMap::new();
    let mut lengths: Vec<usize> = Vec::new();

    // Extra attempts absorb unreachable or self pairs on sparse graphs.
    let attempts = sample_pairs.saturating_mul(4);
    for _ in 0..attempts {
        if lengths.len() >= sample_pairs {
            break;
        }
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i == j {
            continue;
        }
        let source = graph.nodes[i].id.as_str();
        let distances = distance_cache
            .entry(i)
            .or_insert_with(|| bfs_distances(graph, source));
        if let Some(&d) = distances.get(&graph.nodes[j].id) {
            lengths.push(d);
        }
    }

    if lengths.is_empty() {
        return (0.0, 0.0, 0);
    }
    log::debug!("path-length estimate from {} of {sample_pairs} requested pairs", lengths.len());

    let count = lengths.len();
    let average = lengths.iter().sum::<usize>() as f64 / count as f64;
    lengths.sort_unstable();
    let median = if count % 2 == 1 {
        lengths[count / 2] as f64
    } else {
        (lengths[count / 2 - 1] + lengths[count / 2]) as f64 / 2.0
    };

    (average, median, count)
}
