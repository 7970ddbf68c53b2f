//! Error types for the notegraph engine.
//!
//! All errors in the engine are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use thiserror::Error as ThisError;

/// The core error type for all notegraph operations.
///
/// Malformed input never surfaces here: graph and analytics requests clamp
/// out-of-range parameters and degrade to empty results instead. What is
/// left are the programming-defect and offload-boundary cases.
#[derive(ThisError, Debug)]
pub enum Error {
    /// An edge references a node missing from the node collection
    #[error("Graph integrity violation: {reason}")]
    GraphIntegrity { reason: String },

    /// The analytics worker has shut down or its channel is closed
    #[error("Worker unavailable: {reason}")]
    WorkerUnavailable { reason: String },

    /// An offloaded computation reported a failure
    #[error("Computation failed during {operation}: {message}")]
    Computation { operation: String, message: String },

    /// Serialization error crossing the offload boundary
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a graph integrity error
    pub fn graph_integrity(reason: impl Into<String>) -> Self {
        Error::GraphIntegrity {
            reason: reason.into(),
        }
    }

    /// Create a worker unavailable error
    pub fn worker_unavailable(reason: impl Into<String>) -> Self {
        Error::WorkerUnavailable {
            reason: reason.into(),
        }
    }

    /// Create a computation error
    pub fn computation(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Computation {
            operation: operation.into(),
            message: message.into(),
        }
    }
}
