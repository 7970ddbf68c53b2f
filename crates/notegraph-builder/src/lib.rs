//! # Notegraph Builder
//!
//! Converts a collection of notes into a [`notegraph_core::Graph`]:
//! extracts wikilink references, derives tag-similarity edges, supports
//! incremental add/remove of single notes, and produces bounded sub-graphs
//! (neighborhood expansion, caps, degree filters) for visualization.
//!
//! The builder owns its indices; snapshots it produces are independent
//! values with no ties back to the builder's state.

pub mod builder;
pub mod extract;
pub mod options;

pub use builder::GraphBuilder;
pub use extract::extract_link_targets;
pub use options::{GraphFilters, GraphOptions};
