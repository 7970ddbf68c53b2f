//! # Notegraph Algorithms
//!
//! Stateless functions over a [`notegraph_core::Graph`] snapshot: BFS
//! shortest paths, all-shortest-paths enumeration, betweenness centrality,
//! PageRank, label-propagation community detection, and connection-strength
//! aggregation.
//!
//! Every function is pure with respect to its input graph and produces
//! deterministic output for a fixed node/edge order. The expensive members
//! (betweenness, PageRank, community detection) should be routed through
//! `notegraph-offload` for corpus-scale graphs rather than called on an
//! interactive path.

pub mod centrality;
pub mod community;
pub mod heatmap;
pub mod pagerank;
pub mod paths;

pub use centrality::betweenness_centrality;
pub use community::{DEFAULT_MAX_PASSES, detect_communities, group_by_community};
pub use heatmap::connection_heatmap;
pub use pagerank::{PageRankParams, pagerank};
pub use paths::{all_shortest_paths, bfs_distances, shortest_path};
