//! Breadth-first shortest paths over the undirected adjacency.

use notegraph_core::Graph;
use std::collections::{HashMap, VecDeque};

/// BFS hop distances from `source` to every reachable node.
///
/// Unknown sources yield an empty map. The source itself maps to 0.
pub fn bfs_distances(graph: &Graph, source: &str) -> HashMap<String, usize> {
    let mut distances = HashMap::new();
    if !graph.contains_node(source) {
        return distances;
    }
    let adjacency = graph.adjacency();

    distances.insert(source.to_string(), 0);
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current] + 1;
        for &neighbor in &adjacency[current] {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor.to_string(), next_distance);
                queue.push_back(neighbor);
            }
        }
    }

    distances
}

/// First-discovered shortest path from `source` to `target`, inclusive.
///
/// Ties among equal-length paths are broken by edge storage order: the
/// path reached first by BFS over the stored adjacency wins. This is an
/// observable, reproducible policy, not an algorithmic accident.
///
/// Returns `None` when either endpoint is missing or the target is
/// unreachable; `shortest_path(g, a, a)` is `Some(vec![a])`.
pub fn shortest_path(graph: &Graph, source: &str, target: &str) -> Option<Vec<String>> {
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return None;
    }
    if source == target {
        return Some(vec![source.to_string()]);
    }

    let adjacency = graph.adjacency();
    let mut predecessor: HashMap<&str, &str> = HashMap::new();
    let mut queue = VecDeque::from([source]);
    predecessor.insert(source, source);

    while let Some(current) = queue.pop_front() {
        for &neighbor in &adjacency[current] {
            if predecessor.contains_key(neighbor) {
                continue;
            }
            predecessor.insert(neighbor, current);
            if neighbor == target {
                // Walk back to the source.
                let mut path = vec![neighbor.to_string()];
                let mut step = current;
                while step != source {
                    path.push(step.to_string());
                    step = predecessor[step];
                }
                path.push(source.to_string());
                path.reverse();
                return Some(path);
            }
            queue.push_back(neighbor);
        }
    }

    None
}

/// Every shortest path from `source` to `target`, each inclusive of both
/// endpoints, in deterministic order.
///
/// A BFS records the full predecessor set at minimal distance for every
/// node; paths are then rebuilt iteratively in increasing-distance order,
/// memoizing partial reconstructions per node so shared sub-paths are
/// expanded once and no duplicate paths are produced.
pub fn all_shortest_paths(graph: &Graph, source: &str, target: &str) -> Vec<Vec<String>> {
    if !graph.contains_node(source) || !graph.contains_node(target) {
        return Vec::new();
    }
    if source == target {
        return vec![vec![source.to_string()]];
    }

    let adjacency = graph.adjacency();
    let mut distances: HashMap<&str, usize> = HashMap::new();
    let mut predecessors: HashMap<&str, Vec<&str>> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();

    distances.insert(source, 0);
    order.push(source);
    let mut queue = VecDeque::from([source]);

    while let Some(current) = queue.pop_front() {
        let next_distance = distances[current] + 1;
        // The target's level is complete once BFS moves past it.
        if let Some(&target_distance) = distances.get(target)
            && distances[current] >= target_distance
        {
            break;
        }
        for &neighbor in &adjacency[current] {
            match distances.get(neighbor) {
                None => {
                    distances.insert(neighbor, next_distance);
                    predecessors.insert(neighbor, vec![current]);
                    order.push(neighbor);
                    queue.push_back(neighbor);
                }
                Some(&d) if d == next_distance => {
                    // Another shortest route; parallel edges can repeat a
                    // predecessor, which must not duplicate paths.
                    if let Some(preds) = predecessors.get_mut(neighbor)
                        && !preds.contains(&current)
                    {
                        preds.push(current);
                    }
                }
                Some(_) => {}
            }
        }
    }

    if !distances.contains_key(target) {
        return Vec::new();
    }

    // Iterative reconstruction in increasing-distance order: by the time a
    // node is expanded, all its predecessors already carry their full path
    // sets.
    let mut paths: HashMap<&str, Vec<Vec<String>>> = HashMap::new();
    paths.insert(source, vec![vec![source.to_string()]]);
    let target_distance = distances[target];

    for &node in order.iter().skip(1) {
        if distances[node] > target_distance {
            break;
        }
        let mut node_paths = Vec::new();
        for pred in &predecessors[node] {
            if let Some(pred_paths) = paths.get(pred) {
                for pred_path in pred_paths {
                    let mut path = pred_path.clone();
                    path.push(node.to_string());
                    node_paths.push(path);
                }
            }
        }
        paths.insert(node, node_paths);
    }

    paths.remove(target).unwrap_or_default()
}
