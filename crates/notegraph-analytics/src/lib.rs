//! # Notegraph Analytics
//!
//! Derived analytics over graph snapshots: corpus-wide health metrics,
//! density-scored cluster detection, coverage-gap ranking, temporal-trend
//! aggregation, and bridge-note detection.
//!
//! Every function here is pure: (graph snapshot, parameters) in, result
//! value out. Nothing carries state between calls; a new result replaces
//! the old wholesale. The expensive ones belong behind `notegraph-offload`
//! on interactive paths.

pub mod bridges;
pub mod clusters;
mod components;
pub mod gaps;
pub mod health;
pub mod temporal;

pub use bridges::{BridgeNote, bridge_notes};
pub use clusters::detect_clusters;
pub use gaps::{CoverageGap, coverage_gaps};
pub use health::{DEFAULT_SAMPLE_PAIRS, HealthReport, health_metrics};
pub use temporal::{Granularity, TemporalBucket, TemporalTrends, temporal_trends};
