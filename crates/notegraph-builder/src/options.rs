//! Graph construction request parameters.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_max_nodes() -> usize {
    250
}

fn default_max_distance() -> usize {
    3
}

fn default_include_orphans() -> bool {
    true
}

/// Bounds and filters for a single `build_graph` call.
///
/// Every field degrades gracefully: a missing center yields an empty graph,
/// `max_nodes == 0` yields an empty graph, and out-of-range values are
/// treated as their nearest valid interpretation. `build_graph` never fails.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphOptions {
    /// Restrict to the bounded-radius neighborhood of this node
    #[serde(default)]
    pub center: Option<String>,
    /// Hard cap on returned nodes; highest-connectivity nodes win
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    /// Hop radius around `center` (ignored without a center)
    #[serde(default = "default_max_distance")]
    pub max_distance: usize,
    /// Drop nodes with fewer incident edges than this, re-checked after
    /// each removal round
    #[serde(default)]
    pub min_connections: usize,
    /// Whether zero-degree nodes are retained
    #[serde(default = "default_include_orphans")]
    pub include_orphans: bool,
    /// Post-hoc filters applied after the bounded graph is built
    #[serde(default)]
    pub filters: GraphFilters,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            center: None,
            max_nodes: default_max_nodes(),
            max_distance: default_max_distance(),
            min_connections: 0,
            include_orphans: true,
            filters: GraphFilters::default(),
        }
    }
}

impl GraphOptions {
    /// Options centered on a node with the default bounds.
    pub fn centered(center: impl Into<String>) -> Self {
        Self {
            center: Some(center.into()),
            ..Self::default()
        }
    }
}

/// Post-hoc node filters. All present filters must match for a node to
/// survive; edges touching a removed node are removed with it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphFilters {
    /// Folder allow-list (exact match on the owning folder)
    #[serde(default)]
    pub folders: Option<Vec<String>>,
    /// Tag allow-list (any overlap qualifies)
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    /// Case-insensitive substring match on title or content
    #[serde(default)]
    pub search: Option<String>,
    /// Keep notes created at or after this instant
    #[serde(default)]
    pub created_after: Option<DateTime<Utc>>,
    /// Keep notes created at or before this instant
    #[serde(default)]
    pub created_before: Option<DateTime<Utc>>,
}

impl GraphFilters {
    /// Whether any filter is set at all.
    pub fn is_empty(&self) -> bool {
        self.folders.is_none()
            && self.tags.is_none()
            && self.search.is_none()
            && self.created_after.is_none()
            && self.created_before.is_none()
    }
}
