//! Connected-component helpers shared by the analytics functions.

use notegraph_core::Graph;
use std::collections::{HashSet, VecDeque};

/// Connected components over the undirected view, in node-order of first
/// member. `excluded` nodes are treated as absent.
pub(crate) fn connected_components(graph: &Graph, excluded: Option<&str>) -> Vec<Vec<String>> {
    let adjacency = graph.adjacency();
    let mut visited: HashSet<&str> = HashSet::new();
    let mut components = Vec::new();

    for node in &graph.nodes {
        let start = node.id.as_str();
        if visited.contains(start) || Some(start) == excluded {
            continue;
        }

        let mut component = Vec::new();
        let mut queue = VecDeque::from([start]);
        visited.insert(start);

        while let Some(current) = queue.pop_front() {
            component.push(current.to_string());
            for &neighbor in &adjacency[current] {
                if Some(neighbor) == excluded {
                    continue;
                }
                if visited.insert(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(component);
    }

    components
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
    fn test_component_split() {
        let graph = graph_with(&["a", "b", "c", "d"], &[("a", "b"), ("c", "d")]);
        let components = connected_components(&graph, None);
        assert_eq!(components.len(), 2);
    }

    #[test]
    fn test_exclusion_splits_a_chain() {
        let graph = graph_with(&["a", "b", "c"], &[("a", "b"), ("b", "c")]);
        assert_eq!(connected_components(&graph, None).len(), 1);
        assert_eq!(connected_components(&graph, Some("b")).len(), 2);
    }
}
