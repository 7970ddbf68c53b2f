//! Core data models for the knowledge graph.
//!
//! These types are designed to be:
//! - **Serializable**: All types derive Serialize/Deserialize
//! - **Debuggable**: Derive Debug for easy inspection
//! - **Type-Safe**: Enums replace magic strings
//!
//! The [`Graph`] snapshot is the value passed between the builder, the
//! algorithm library, and the offload worker. It is always passed by value
//! across execution-context boundaries, never shared by reference.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Derive a stable node identifier from a note path or name.
///
/// The same note path always maps to the same id across rebuilds: the
/// markdown extension is stripped, surrounding whitespace is trimmed, and
/// the result is lowercased.
pub fn note_id(path: &str) -> String {
    let trimmed = path.trim();
    let stem = trimmed.strip_suffix(".md").unwrap_or(trimmed);
    stem.to_lowercase()
}

/// A note record as produced by the external parsing layer.
///
/// The engine does not parse markdown beyond locating wikilink references
/// in `content`; tags, word counts, and timestamps arrive pre-extracted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Stable identifier (see [`note_id`])
    pub id: String,
    /// Display name
    pub title: String,
    /// Owning folder, if any
    pub folder: Option<String>,
    /// Raw text content, scanned for link references
    pub content: String,
    /// Tags extracted by the parsing layer
    pub tags: Vec<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    /// Word count from the parsing layer (used by coverage-gap scoring)
    pub word_count: usize,
}

impl Note {
    /// Create a note with timestamps set to now and no tags.
    pub fn new(path: &str, title: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        let word_count = content.split_whitespace().count();
        let now = Utc::now();
        Self {
            id: note_id(path),
            title: title.into(),
            folder: None,
            content,
            tags: Vec::new(),
            created: now,
            modified: now,
            word_count,
        }
    }

    /// Set tags, builder style.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Set owning folder, builder style.
    pub fn with_folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }
}

/// A graph vertex representing a single note.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    /// Unique within one graph; pure function of the note path
    pub id: String,
    /// Display name
    pub label: String,
    pub folder: Option<String>,
    pub tags: Vec<String>,
    /// Rendering size/weight hint
    pub size: f64,
    /// Optional rendering color hint
    pub color: Option<String>,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
}

impl Node {
    /// Build a node from a note record. The size hint is a pure function
    /// of content volume; connectivity is never mixed in, so analytics can
    /// read it as word-count evidence.
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id.clone(),
            label: note.title.clone(),
            folder: note.folder.clone(),
            tags: note.tags.clone(),
            size: 1.0 + (note.word_count as f64).sqrt() / 10.0,
            color: None,
            created: note.created,
            modified: note.modified,
        }
    }
}

/// Type of relationship between two notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// `[[Target]]` reference found in note content
    Wikilink,
    /// Two notes share a tag
    TagShared,
    /// Reciprocal wikilink folded into an existing edge
    Backlink,
}

/// A weighted, typed relationship between two notes.
///
/// Edges are unordered pairs for identity purposes: `(a, b)` and `(b, a)`
/// of the same kind are the same edge and accumulate into one weight.
/// The stored `source`/`target` orientation is the discovery direction
/// (linker to linked) and is what PageRank's directed pass follows.
/// Self-loops are never constructed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub kind: EdgeKind,
    /// Positive multiplicity/strength (co-occurrence or reference count)
    pub weight: u32,
}

impl Edge {
    /// Create an edge. Returns `None` for self-loops.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        kind: EdgeKind,
        weight: u32,
    ) -> Option<Self> {
        let source = source.into();
        let target = target.into();
        if source == target {
            return None;
        }
        Some(Self {
            source,
            target,
            kind,
            weight: weight.max(1),
        })
    }

    /// Unordered identity key: (min endpoint, max endpoint, kind).
    pub fn key(&self) -> (String, String, EdgeKind) {
        if self.source <= self.target {
            (self.source.clone(), self.target.clone(), self.kind)
        } else {
            (self.target.clone(), self.source.clone(), self.kind)
        }
    }

    /// Whether this edge touches the given node id.
    pub fn touches(&self, id: &str) -> bool {
        self.source == id || self.target == id
    }
}

/// An ordered collection of nodes and edges.
///
/// Node order and edge order are insertion order and are the deterministic
/// iteration order every algorithm relies on. Referential integrity (every
/// edge endpoint exists in `nodes`) is the builder's responsibility;
/// [`Graph::sanitize`] is the production-mode backstop.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from already-validated parts.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Whether a node with this id exists.
    pub fn contains_node(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    /// Add a node, replacing any existing node with the same id in place
    /// so insertion order is preserved.
    pub fn add_node(&mut self, node: Node) {
        if let Some(existing) = self.nodes.iter_mut().find(|n| n.id == node.id) {
            *existing = node;
        } else {
            self.nodes.push(node);
        }
    }

    /// Add edge weight between two nodes, accumulating into an existing
    /// edge of the same unordered pair and kind. Self-loops are ignored.
    pub fn upsert_edge(&mut self, source: &str, target: &str, kind: EdgeKind, weight: u32) {
        let Some(edge) = Edge::new(source, target, kind, weight) else {
            return;
        };
        let key = edge.key();
        if let Some(existing) = self.edges.iter_mut().find(|e| e.key() == key) {
            existing.weight += edge.weight;
        } else {
            self.edges.push(edge);
        }
    }

    /// Check referential integrity: every edge endpoint must exist.
    pub fn validate(&self) -> crate::Result<()> {
        let ids: std::collections::HashSet<&str> =
            self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            if !ids.contains(edge.source.as_str()) || !ids.contains(edge.target.as_str()) {
                return Err(crate::Error::graph_integrity(format!(
                    "edge {} -> {} references a missing node",
                    edge.source, edge.target
                )));
            }
        }
        Ok(())
    }

    /// Drop edges that reference missing nodes. A dangling edge is a
    /// programming defect upstream: loud in debug builds, dropped with an
    /// error log in release builds.
    pub fn sanitize(&mut self) {
        let ids: std::collections::HashSet<String> =
            self.nodes.iter().map(|n| n.id.clone()).collect();
        let before = self.edges.len();
        self.edges
            .retain(|e| ids.contains(&e.source) && ids.contains(&e.target));
        let dropped = before - self.edges.len();
        if dropped > 0 {
            debug_assert!(false, "graph contained {dropped} dangling edges");
            log::error!("dropped {dropped} dangling edges during sanitize");
        }
    }

    /// Undirected adjacency: node id to neighbor ids, in edge insertion
    /// order. Every node appears as a key, orphans with an empty list.
    pub fn adjacency(&self) -> HashMap<&str, Vec<&str>> {
        let mut adj: HashMap<&str, Vec<&str>> = self
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Vec::new()))
            .collect();
        for edge in &self.edges {
            if let Some(list) = adj.get_mut(edge.source.as_str()) {
                list.push(edge.target.as_str());
            }
            if let Some(list) = adj.get_mut(edge.target.as_str()) {
                list.push(edge.source.as_str());
            }
        }
        adj
    }

    /// Undirected adjacency carrying summed edge weights.
    pub fn weighted_adjacency(&self) -> HashMap<&str, Vec<(&str, u32)>> {
        let mut adj: HashMap<&str, Vec<(&str, u32)>> = self
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Vec::new()))
            .collect();
        for edge in &self.edges {
            if let Some(list) = adj.get_mut(edge.source.as_str()) {
                list.push((edge.target.as_str(), edge.weight));
            }
            if let Some(list) = adj.get_mut(edge.target.as_str()) {
                list.push((edge.source.as_str(), edge.weight));
            }
        }
        adj
    }

    /// Directed adjacency following stored edge orientation (source to
    /// target). PageRank's link-following semantics use this view.
    pub fn directed_adjacency(&self) -> HashMap<&str, Vec<&str>> {
        let mut adj: HashMap<&str, Vec<&str>> = self
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), Vec::new()))
            .collect();
        for edge in &self.edges {
            if let Some(list) = adj.get_mut(edge.source.as_str()) {
                list.push(edge.target.as_str());
            }
        }
        adj
    }

    /// Undirected degree (number of incident edges) per node id.
    pub fn degrees(&self) -> HashMap<&str, usize> {
        let mut degrees: HashMap<&str, usize> =
            self.nodes.iter().map(|n| (n.id.as_str(), 0)).collect();
        for edge in &self.edges {
            if let Some(d) = degrees.get_mut(edge.source.as_str()) {
                *d += 1;
            }
            if let Some(d) = degrees.get_mut(edge.target.as_str()) {
                *d += 1;
            }
        }
        degrees
    }
}

/// A detected community of densely interconnected notes.
///
/// Computed fresh on each analytics request; never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cluster {
    pub id: usize,
    /// Human-readable label derived from dominant member tags
    pub label: String,
    /// Member node ids
    pub members: Vec<String>,
    pub size: usize,
    /// Realized edges among members / possible member pairs
    pub density: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_id_is_stable() {
        assert_eq!(note_id("Projects/My Note.md"), "projects/my note");
        assert_eq!(note_id("Projects/My Note.md"), note_id(" Projects/My Note.md "));
        assert_eq!(note_id("plain"), "plain");
    }

    #[test]
    fn test_edge_rejects_self_loop() {
        assert!(Edge::new("a", "a", EdgeKind::Wikilink, 1).is_none());
        assert!(Edge::new("a", "b", EdgeKind::Wikilink, 1).is_some());
    }

    #[test]
    fn test_edge_key_is_unordered() {
        let ab = Edge::new("a", "b", EdgeKind::TagShared, 1).unwrap();
        let ba = Edge::new("b", "a", EdgeKind::TagShared, 1).unwrap();
        assert_eq!(ab.key(), ba.key());
    }

    #[test]
    fn test_upsert_edge_accumulates() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "")));
        graph.add_node(Node::from_note(&Note::new("b", "B", "")));
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);
        graph.upsert_edge("b", "a", EdgeKind::Wikilink, 2);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].weight, 3);
    }

    #[test]
    fn test_upsert_edge_distinct_kinds_stay_separate() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "")));
        graph.add_node(Node::from_note(&Note::new("b", "B", "")));
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);
        graph.upsert_edge("a", "b", EdgeKind::TagShared, 1);

        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_add_node_replaces_in_place() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "")));
        graph.add_node(Node::from_note(&Note::new("b", "B", "")));

        let mut updated = Node::from_note(&Note::new("a", "A renamed", ""));
        updated.size = 9.0;
        graph.add_node(updated);

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.nodes[0].label, "A renamed");
    }

    #[test]
    fn test_validate_catches_dangling_edge() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "")));
        graph.edges.push(Edge {
            source: "a".to_string(),
            target: "ghost".to_string(),
            kind: EdgeKind::Wikilink,
            weight: 1,
        });

        assert!(graph.validate().is_err());
    }

    #[test]
    fn test_adjacency_is_undirected_and_complete() {
        let mut graph = Graph::new();
        for id in ["a", "b", "c"] {
            graph.add_node(Node::from_note(&Note::new(id, id, "")));
        }
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);

        let adj = graph.adjacency();
        assert_eq!(adj["a"], vec!["b"]);
        assert_eq!(adj["b"], vec!["a"]);
        assert!(adj["c"].is_empty());
    }

    #[test]
    fn test_directed_adjacency_keeps_orientation() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "")));
        graph.add_node(Node::from_note(&Note::new("b", "B", "")));
        graph.upsert_edge("a", "b", EdgeKind::Wikilink, 1);

        let out = graph.directed_adjacency();
        assert_eq!(out["a"], vec!["b"]);
        assert!(out["b"].is_empty());
    }

    #[test]
    fn test_graph_serde_round_trip() {
        let mut graph = Graph::new();
        graph.add_node(Node::from_note(&Note::new("a", "A", "hello world")));
        graph.add_node(Node::from_note(&Note::new("b", "B", "")));
        graph.upsert_edge("a", "b", EdgeKind::TagShared, 2);

        let json = serde_json::to_string(&graph).unwrap();
        let back: Graph = serde_json::from_str(&json).unwrap();
        assert_eq!(graph, back);
    }
}
