//! # Notegraph Core
//!
//! Core data models and error types for the notegraph engine. This crate
//! defines the canonical types that all other crates depend on.
//!
//! ## Architecture Principles
//!
//! - **Type-Driven Design**: Strong types replace string-based APIs
//! - **Zero Panic in Libraries**: All fallible operations return `Result<T>`
//! - **Immutable Snapshots**: [`Graph`] values are consumed read-only by
//!   algorithms and passed by value across execution-context boundaries
//!
//! ## Core Modules
//!
//! - [`models`] - Graph model types (Note, Node, Edge, Graph, Cluster)
//! - [`error`] - Error types and Result alias

pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{Cluster, Edge, EdgeKind, Graph, Node, Note, note_id};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::models::{Cluster, Edge, EdgeKind, Graph, Node, Note, note_id};
}
