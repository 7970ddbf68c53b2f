//! # Notegraph Offload
//!
//! Message-passing offload for the expensive analytics in
//! `notegraph-algo` and `notegraph-analytics`. A caller serializes its
//! intent into an [`AnalyticsRequest`], hands a graph snapshot plus the
//! request to a [`WorkerHandle`], and awaits the matching
//! [`AnalyticsResponse`]. Workers process one request at a time on the
//! blocking thread pool, keeping quadratic-and-worse computations off
//! interactive paths.

pub mod envelope;
pub mod worker;

pub use envelope::{AnalyticsRequest, AnalyticsResponse, AnalyticsResult};
pub use worker::{AnalyticsWorker, WorkerHandle};
