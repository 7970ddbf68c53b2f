//! Incremental graph construction from a note corpus.

use crate::extract::extract_link_targets;
use crate::options::GraphOptions;
use notegraph_core::prelude::*;
use petgraph::Direction::{Incoming, Outgoing};
use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};

/// Internal edge payload: relationship kind plus accumulated weight.
#[derive(Debug, Clone)]
struct EdgeRecord {
    kind: EdgeKind,
    weight: u32,
}

/// Incremental knowledge-graph builder.
///
/// Owns the note table and a petgraph index; mutated only by [`add_note`]
/// and [`remove_note`]. [`build_graph`] has no side effects and returns a
/// self-contained [`Graph`] snapshot that can cross execution-context
/// boundaries by value.
///
/// Unresolved wikilinks (targets with no matching note) are **dropped**
/// from the graph rather than materialized as placeholder nodes. They are
/// remembered internally so that registering the target note later creates
/// the edge (tagged [`EdgeKind::Backlink`], since it is discovered from the
/// target side).
///
/// [`add_note`]: GraphBuilder::add_note
/// [`remove_note`]: GraphBuilder::remove_note
/// [`build_graph`]: GraphBuilder::build_graph
pub struct GraphBuilder {
    /// Directed index: node weight is the note id, edges carry kind+weight
    graph: StableDiGraph<String, EdgeRecord>,
    /// Note table, keyed by note id
    notes: HashMap<String, Note>,
    /// Note id to petgraph index
    id_index: HashMap<String, NodeIndex>,
    /// Last path segment (stem) to note id; first registration wins
    stem_index: HashMap<String, String>,
    /// Lowercased title to note id; first registration wins
    title_index: HashMap<String, String>,
    /// Tag to member note ids (ordered for deterministic edge creation)
    tag_index: HashMap<String, BTreeSet<String>>,
    /// Unresolved wikilink targets: normalized target to source note ids,
    /// one entry per reference
    pending_links: HashMap<String, Vec<String>>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            graph: StableDiGraph::new(),
            notes: HashMap::new(),
            id_index: HashMap::new(),
            stem_index: HashMap::new(),
            title_index: HashMap::new(),
            tag_index: HashMap::new(),
            pending_links: HashMap::new(),
        }
    }

    /// Build from a note collection in one pass.
    pub fn from_notes(notes: impl IntoIterator<Item = Note>) -> Self {
        let mut builder = Self::new();
        for note in notes {
            builder.add_note(note);
        }
        builder
    }

    /// Number of registered notes.
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Whether a note id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.notes.contains_key(id)
    }

    /// Look up a registered note.
    pub fn note(&self, id: &str) -> Option<&Note> {
        self.notes.get(id)
    }

    /// Register or update a single note, recomputing the edges its content
    /// and tag set produce.
    pub fn add_note(&mut self, note: Note) {
        let id = note.id.clone();

        if self.notes.contains_key(&id) {
            self.detach(&id);
        }

        let idx = match self.id_index.get(&id) {
            Some(&idx) => idx,
            None => {
                let idx = self.graph.add_node(id.clone());
                self.id_index.insert(id.clone(), idx);
                idx
            }
        };

        // Register lookup keys. First registration wins on collisions so
        // resolution stays stable across rebuilds.
        if let Some(stem) = id.rsplit('/').next() {
            self.stem_index.entry(stem.to_string()).or_insert_with(|| id.clone());
        }
        self.title_index
            .entry(note.title.to_lowercase())
            .or_insert_with(|| id.clone());
        for tag in &note.tags {
            self.tag_index.entry(tag.clone()).or_default().insert(id.clone());
        }

        // Resolve references other notes made to this note before it
        // existed. Discovered from the target side, hence Backlink.
        let mut pending_keys = vec![id.clone()];
        let title_key = note_id(&note.title);
        if title_key != id {
            pending_keys.push(title_key);
        }
        if let Some(stem) = id.rsplit('/').next()
            && stem != id
        {
            pending_keys.push(stem.to_string());
        }
        for key in pending_keys {
            if let Some(sources) = self.pending_links.remove(&key) {
                for source in sources {
                    if source == id {
                        continue;
                    }
                    if let Some(&source_idx) = self.id_index.get(&source) {
                        self.accumulate_edge(source_idx, idx, EdgeKind::Backlink, 1);
                    }
                }
            }
        }

        // Wikilink edges from content, weight = reference multiplicity.
        let mut link_weights: Vec<(String, u32)> = Vec::new();
        for target in extract_link_targets(&note.content) {
            match self.resolve_target(&target) {
                Some(target_id) if target_id == id => {} // self-links never become edges
                Some(target_id) => {
                    if let Some(entry) = link_weights.iter_mut().find(|(t, _)| *t == target_id) {
                        entry.1 += 1;
                    } else {
                        link_weights.push((target_id, 1));
                    }
                }
                None => {
                    self.pending_links
                        .entry(note_id(&target))
                        .or_default()
                        .push(id.clone());
                }
            }
        }
        for (target_id, weight) in link_weights {
            let target_idx = self.id_index[&target_id];
            self.accumulate_edge(idx, target_idx, EdgeKind::Wikilink, weight);
        }

        // Tag-similarity edges, weight = number of shared tags.
        let mut shared: Vec<(String, u32)> = Vec::new();
        for tag in &note.tags {
            if let Some(members) = self.tag_index.get(tag) {
                for other in members {
                    if *other == id {
                        continue;
                    }
                    if let Some(entry) = shared.iter_mut().find(|(o, _)| o == other) {
                        entry.1 += 1;
                    } else {
                        shared.push((other.clone(), 1));
                    }
                }
            }
        }
        for (other, weight) in shared {
            let other_idx = self.id_index[&other];
            self.accumulate_edge(idx, other_idx, EdgeKind::TagShared, weight);
        }

        log::debug!(
            "registered note {id}: {} nodes, {} edges",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.notes.insert(id, note);
    }

    /// Delete a note and every edge touching it. Unknown ids are a no-op.
    ///
    /// Incoming link references survive as pending links, so re-adding the
    /// note restores them.
    pub fn remove_note(&mut self, id: &str) {
        let Some(&idx) = self.id_index.get(id) else {
            return;
        };

        // Remember who linked here so a future re-add restores the edges.
        // One pending entry per unit of weight, so reference multiplicity
        // survives a remove/re-add cycle and matches a fresh rebuild.
        let incoming_sources: Vec<(String, u32)> = self
            .graph
            .edges_directed(idx, Incoming)
            .filter(|e| matches!(e.weight().kind, EdgeKind::Wikilink | EdgeKind::Backlink))
            .map(|e| (self.graph[e.source()].clone(), e.weight().weight))
            .collect();
        for (source, weight) in incoming_sources {
            let pending = self.pending_links.entry(id.to_string()).or_default();
            for _ in 0..weight {
                pending.push(source.clone());
            }
        }

        self.detach(id);
        self.id_index.remove(id);
        self.graph.remove_node(idx);
        self.notes.remove(id);
    }

    /// Remove the index entries and edges derived from a note's current
    /// content and tags, in preparation for an update or removal.
    fn detach(&mut self, id: &str) {
        let Some(&idx) = self.id_index.get(id) else {
            return;
        };

        // Every outgoing edge originates from this note's content or tags.
        // Tag-shared edges are symmetric, so the incoming direction goes
        // too; incoming link edges belong to other notes' content and stay.
        let stale: Vec<_> = self
            .graph
            .edges_directed(idx, Outgoing)
            .map(|e| e.id())
            .chain(
                self.graph
                    .edges_directed(idx, Incoming)
                    .filter(|e| e.weight().kind == EdgeKind::TagShared)
                    .map(|e| e.id()),
            )
            .collect();
        for edge_id in stale {
            self.graph.remove_edge(edge_id);
        }

        if let Some(old) = self.notes.get(id) {
            if self.title_index.get(&old.title.to_lowercase()).map(String::as_str) == Some(id) {
                self.title_index.remove(&old.title.to_lowercase());
            }
            for tag in &old.tags {
                if let Some(members) = self.tag_index.get_mut(tag) {
                    members.remove(id);
                    if members.is_empty() {
                        self.tag_index.remove(tag);
                    }
                }
            }
        }
        if let Some(stem) = id.rsplit('/').next()
            && self.stem_index.get(stem).map(String::as_str) == Some(id)
        {
            self.stem_index.remove(stem);
        }

        // Drop this note's own unresolved references.
        self.pending_links.retain(|_, sources| {
            sources.retain(|s| s != id);
            !sources.is_empty()
        });
    }

    /// Resolve a wikilink target to a registered note id: exact id first,
    /// then path stem, then display title.
    fn resolve_target(&self, target: &str) -> Option<String> {
        let key = note_id(target);
        if self.id_index.contains_key(&key) {
            return Some(key);
        }
        if let Some(id) = self.stem_index.get(&key) {
            return Some(id.clone());
        }
        self.title_index.get(&target.trim().to_lowercase()).cloned()
    }

    /// Accumulate edge weight between two index nodes, folding into an
    /// existing edge of the same kind in either orientation.
    fn accumulate_edge(&mut self, a: NodeIndex, b: NodeIndex, kind: EdgeKind, weight: u32) {
        let existing = self
            .graph
            .edges_connecting(a, b)
            .chain(self.graph.edges_connecting(b, a))
            .find(|e| e.weight().kind == kind)
            .map(|e| e.id());
        match existing {
            Some(edge_id) => {
                if let Some(record) = self.graph.edge_weight_mut(edge_id) {
                    record.weight += weight;
                }
            }
            None => {
                self.graph.add_edge(a, b, EdgeRecord { kind, weight });
            }
        }
    }

    /// Full-corpus snapshot with default bounds.
    pub fn snapshot(&self) -> Graph {
        self.build_graph(&GraphOptions {
            max_nodes: usize::MAX,
            ..GraphOptions::default()
        })
    }

    /// Produce a bounded graph snapshot.
    ///
    /// Selection proceeds in this order: neighborhood expansion around the
    /// center (when set), deterministic truncation to `max_nodes` keeping
    /// the highest weighted-degree nodes (center always survives; ties
    /// break by id), the `min_connections` degree filter iterated to a
    /// fixed point, the orphan flag, and finally the post-hoc note filters.
    ///
    /// Degrades instead of failing: an unknown center or a zero node cap
    /// yields an empty graph.
    pub fn build_graph(&self, options: &GraphOptions) -> Graph {
        if options.max_nodes == 0 {
            return Graph::new();
        }

        // Candidate set in deterministic order.
        let candidates: Vec<NodeIndex> = match &options.center {
            Some(center) => {
                let center_id = note_id(center);
                match self.id_index.get(&center_id) {
                    Some(&center_idx) => self.expand_neighborhood(center_idx, options.max_distance),
                    None => return Graph::new(),
                }
            }
            None => self.graph.node_indices().collect(),
        };

        let mut selected: HashSet<NodeIndex> = candidates.iter().copied().collect();

        // Truncate to the cap, preferring the best-connected nodes.
        if selected.len() > options.max_nodes {
            let center_idx = options
                .center
                .as_ref()
                .and_then(|c| self.id_index.get(&note_id(c)))
                .copied();
            let mut ranked: Vec<NodeIndex> = candidates.clone();
            ranked.sort_by(|&a, &b| {
                self.weighted_degree(&selected, b)
                    .cmp(&self.weighted_degree(&selected, a))
                    .then_with(|| self.graph[a].cmp(&self.graph[b]))
            });
            let mut kept: HashSet<NodeIndex> = ranked
                .into_iter()
                .take(options.max_nodes)
                .collect();
            if let Some(center_idx) = center_idx
                && !kept.contains(&center_idx)
            {
                // Keep the center by displacing the weakest survivor.
                let weakest = kept.iter().copied().min_by(|&a, &b| {
                    self.weighted_degree(&selected, a)
                        .cmp(&self.weighted_degree(&selected, b))
                        .then_with(|| self.graph[b].cmp(&self.graph[a]))
                });
                if let Some(weakest) = weakest {
                    kept.remove(&weakest);
                }
                kept.insert(center_idx);
            }
            selected = kept;
        }

        // Degree threshold, re-checked until no node falls below it.
        if options.min_connections > 0 {
            loop {
                let below: Vec<NodeIndex> = selected
                    .iter()
                    .copied()
                    .filter(|&idx| self.degree_within(&selected, idx) < options.min_connections)
                    .collect();
                if below.is_empty() {
                    break;
                }
                for idx in below {
                    selected.remove(&idx);
                }
            }
        }

        if !options.include_orphans {
            let orphans: Vec<NodeIndex> = selected
                .iter()
                .copied()
                .filter(|&idx| self.degree_within(&selected, idx) == 0)
                .collect();
            for idx in orphans {
                selected.remove(&idx);
            }
        }

        // Post-hoc note filters.
        if !options.filters.is_empty() {
            let filters = &options.filters;
            let failing: Vec<NodeIndex> = selected
                .iter()
                .copied()
                .filter(|&idx| {
                    let note = &self.notes[&self.graph[idx]];
                    !Self::note_matches(note, filters)
                })
                .collect();
            for idx in failing {
                selected.remove(&idx);
            }
        }

        self.materialize(&candidates, &selected)
    }

    fn note_matches(note: &Note, filters: &crate::options::GraphFilters) -> bool {
        if let Some(folders) = &filters.folders {
            match &note.folder {
                Some(folder) if folders.contains(folder) => {}
                _ => return false,
            }
        }
        if let Some(tags) = &filters.tags
            && !note.tags.iter().any(|t| tags.contains(t))
        {
            return false;
        }
        if let Some(search) = &filters.search {
            let needle = search.to_lowercase();
            if !note.title.to_lowercase().contains(&needle)
                && !note.content.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(after) = &filters.created_after
            && note.created < *after
        {
            return false;
        }
        if let Some(before) = &filters.created_before
            && note.created > *before
        {
            return false;
        }
        true
    }

    /// Breadth-first expansion over the undirected view, up to `max_hops`.
    /// The center is always the first entry.
    fn expand_neighborhood(&self, center: NodeIndex, max_hops: usize) -> Vec<NodeIndex> {
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        let mut queue = VecDeque::new();

        visited.insert(center);
        queue.push_back((center, 0usize));

        while let Some((idx, hops)) = queue.pop_front() {
            order.push(idx);
            if hops >= max_hops {
                continue;
            }
            let neighbors = self
                .graph
                .neighbors_directed(idx, Outgoing)
                .chain(self.graph.neighbors_directed(idx, Incoming));
            for neighbor in neighbors {
                if visited.insert(neighbor) {
                    queue.push_back((neighbor, hops + 1));
                }
            }
        }

        order
    }

    /// Incident edge count restricted to a node subset.
    fn degree_within(&self, selected: &HashSet<NodeIndex>, idx: NodeIndex) -> usize {
        self.graph
            .edges_directed(idx, Outgoing)
            .filter(|e| selected.contains(&e.target()))
            .count()
            + self
                .graph
                .edges_directed(idx, Incoming)
                .filter(|e| selected.contains(&e.source()))
                .count()
    }

    /// Summed incident edge weight restricted to a node subset.
    fn weighted_degree(&self, selected: &HashSet<NodeIndex>, idx: NodeIndex) -> u64 {
        self.graph
            .edges_directed(idx, Outgoing)
            .filter(|e| selected.contains(&e.target()))
            .map(|e| e.weight().weight as u64)
            .sum::<u64>()
            + self
                .graph
                .edges_directed(idx, Incoming)
                .filter(|e| selected.contains(&e.source()))
                .map(|e| e.weight().weight as u64)
                .sum::<u64>()
    }

    /// Materialize the selected subset as a snapshot, preserving candidate
    /// order for nodes and edge-index order for edges.
    fn materialize(&self, candidates: &[NodeIndex], selected: &HashSet<NodeIndex>) -> Graph {
        let mut nodes = Vec::new();
        for &idx in candidates {
            if !selected.contains(&idx) {
                continue;
            }
            let id = &self.graph[idx];
            let note = &self.notes[id];
            // Size stays a pure function of content volume; connectivity is
            // visible through the edges, and coverage-gap scoring relies on
            // size being degree-free.
            nodes.push(Node::from_note(note));
        }

        let mut edges: Vec<Edge> = Vec::new();
        for edge_ref in self.graph.edge_references() {
            if !selected.contains(&edge_ref.source()) || !selected.contains(&edge_ref.target()) {
                continue;
            }
            let record = edge_ref.weight();
            let source = self.graph[edge_ref.source()].clone();
            let target = self.graph[edge_ref.target()].clone();
            if let Some(edge) = Edge::new(source, target, record.kind, record.weight) {
                let key = edge.key();
                if let Some(existing) = edges.iter_mut().find(|e| e.key() == key) {
                    existing.weight += edge.weight;
                } else {
                    edges.push(edge);
                }
            }
        }

        let graph = Graph::from_parts(nodes, edges);
        debug_assert!(graph.validate().is_ok());
        graph
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(path: &str, content: &str) -> Note {
        Note::new(path, path, content)
    }

    #[test]
    fn test_add_note_creates_nodes_and_link_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "links to [[b]]"));
        builder.add_note(note("b", ""));

        let graph = builder.snapshot();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].kind, EdgeKind::Backlink); // b registered after a linked it
    }

    #[test]
    fn test_forward_link_resolves_immediately() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "links to [[b]]"));

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].kind, EdgeKind::Wikilink);
        assert_eq!(graph.edges[0].source, "a");
        assert_eq!(graph.edges[0].target, "b");
    }

    #[test]
    fn test_repeated_references_accumulate_weight() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]] then [[b]] again"));

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].weight, 2);
    }

    #[test]
    fn test_reciprocal_links_fold_into_one_edge() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "[[b]]"));
        builder.add_note(note("b", "[[a]]"));

        let graph = builder.snapshot();
        // One folded wikilink-family edge carrying both references.
        let total: u32 = graph.edges.iter().map(|e| e.weight).sum();
        assert!(total >= 2);
        assert!(graph.edge_count() <= 2);
    }

    #[test]
    fn test_unresolved_links_are_dropped() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "[[nowhere]]"));

        let graph = builder.snapshot();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_tag_shared_edges_weighted_by_overlap() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "").with_tags(vec!["rust".into(), "graphs".into()]));
        builder.add_note(note("b", "").with_tags(vec!["rust".into(), "graphs".into()]));

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].kind, EdgeKind::TagShared);
        assert_eq!(graph.edges[0].weight, 2);
    }

    #[test]
    fn test_update_recomputes_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("c", ""));
        builder.add_note(note("a", "[[b]]"));
        builder.add_note(note("a", "[[c]]")); // update replaces the old link

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].target, "c");
    }

    #[test]
    fn test_remove_note_drops_touching_edges() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]]"));
        builder.remove_note("b");

        let graph = builder.snapshot();
        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_remove_then_readd_restores_incoming_links() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]]"));
        builder.remove_note("b");
        builder.add_note(note("b", ""));

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.edges[0].touches("a"));
        assert!(graph.edges[0].touches("b"));
    }

    #[test]
    fn test_remove_then_readd_keeps_reference_multiplicity() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]] then [[b]] and [[b]] once more"));
        builder.remove_note("b");
        builder.add_note(note("b", ""));

        let restored = builder.snapshot();
        assert_eq!(restored.edge_count(), 1);
        assert_eq!(restored.edges[0].weight, 3);

        // Incremental remove/re-add agrees with a fresh rebuild.
        let rebuilt = GraphBuilder::from_notes([
            note("b", ""),
            note("a", "[[b]] then [[b]] and [[b]] once more"),
        ])
        .snapshot();
        assert_eq!(restored.edges[0].weight, rebuilt.edges[0].weight);
    }

    #[test]
    fn test_resolution_by_stem_and_title() {
        let mut builder = GraphBuilder::new();
        builder.add_note(Note::new("projects/deep note.md", "Deep Note", ""));
        builder.add_note(note("a", "[[deep note]] and [[Deep Note]]"));

        let graph = builder.snapshot();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edges[0].weight, 2);
    }

    #[test]
    fn test_missing_center_yields_empty_graph() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", ""));

        let graph = builder.build_graph(&GraphOptions::centered("missing"));
        assert!(graph.is_empty());
    }

    #[test]
    fn test_zero_max_nodes_yields_empty_graph() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", ""));

        let options = GraphOptions {
            max_nodes: 0,
            ..GraphOptions::default()
        };
        assert!(builder.build_graph(&options).is_empty());
    }

    #[test]
    fn test_max_distance_bounds_neighborhood() {
        let mut builder = GraphBuilder::new();
        // Chain a -> b -> c -> d
        builder.add_note(note("d", ""));
        builder.add_note(note("c", "[[d]]"));
        builder.add_note(note("b", "[[c]]"));
        builder.add_note(note("a", "[[b]]"));

        let options = GraphOptions {
            max_distance: 1,
            ..GraphOptions::centered("a")
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 2); // a and b only
        assert!(graph.contains_node("a"));
        assert!(graph.contains_node("b"));
    }

    #[test]
    fn test_max_nodes_truncation_keeps_best_connected() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("hub", ""));
        for leaf in ["l1", "l2", "l3"] {
            builder.add_note(note(leaf, "[[hub]]"));
        }
        builder.add_note(note("orphan", ""));

        let options = GraphOptions {
            max_nodes: 4,
            ..GraphOptions::default()
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 4);
        assert!(graph.contains_node("hub"));
        assert!(!graph.contains_node("orphan"));
    }

    #[test]
    fn test_min_connections_filter_rechecks() {
        let mut builder = GraphBuilder::new();
        // Chain: a - b - c. With min_connections = 2, b qualifies at first
        // but loses both neighbors, so the fixed point is empty.
        builder.add_note(note("c", ""));
        builder.add_note(note("b", "[[c]]"));
        builder.add_note(note("a", "[[b]]"));

        let options = GraphOptions {
            min_connections: 2,
            ..GraphOptions::default()
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 0);
    }

    #[test]
    fn test_orphan_exclusion() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]]"));
        builder.add_note(note("loner", ""));

        let options = GraphOptions {
            include_orphans: false,
            ..GraphOptions::default()
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 2);
        assert!(!graph.contains_node("loner"));
    }

    #[test]
    fn test_tag_filter() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "").with_tags(vec!["keep".into()]));
        builder.add_note(note("b", ""));

        let options = GraphOptions {
            filters: crate::options::GraphFilters {
                tags: Some(vec!["keep".into()]),
                ..Default::default()
            },
            ..GraphOptions::default()
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("a"));
    }

    #[test]
    fn test_search_filter_matches_content() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("a", "quarterly planning agenda"));
        builder.add_note(note("b", "recipe collection"));

        let options = GraphOptions {
            filters: crate::options::GraphFilters {
                search: Some("Planning".into()),
                ..Default::default()
            },
            ..GraphOptions::default()
        };
        let graph = builder.build_graph(&options);
        assert_eq!(graph.node_count(), 1);
        assert!(graph.contains_node("a"));
    }

    #[test]
    fn test_node_size_independent_of_connectivity() {
        let mut builder = GraphBuilder::new();
        let content = "same length of text in both notes [[hub]]";
        builder.add_note(note("hub", ""));
        builder.add_note(note("linked", content));
        builder.add_note(Note::new("loner", "loner", content.replace("[[hub]]", "nothing")));

        let graph = builder.snapshot();
        let linked = graph.node("linked").unwrap();
        let loner = graph.node("loner").unwrap();
        assert!((linked.size - loner.size).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_is_side_effect_free() {
        let mut builder = GraphBuilder::new();
        builder.add_note(note("b", ""));
        builder.add_note(note("a", "[[b]]"));

        let first = builder.snapshot();
        let second = builder.snapshot();
        assert_eq!(first, second);
    }
}
