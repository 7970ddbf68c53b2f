//! Request/response envelopes for offloaded analytics.
//!
//! Every offloadable computation has one request variant carrying exactly
//! its parameters, and one response variant carrying exactly its result.
//! Both enums are tagged by operation name, so the serialized forms carry
//! an `"operation"` discriminant that survives the round trip and lets
//! callers route responses without inspecting payloads.

use notegraph_algo::{
    DEFAULT_MAX_PASSES, PageRankParams, all_shortest_paths, betweenness_centrality,
    connection_heatmap, detect_communities, pagerank, shortest_path,
};
use notegraph_analytics::{
    BridgeNote, CoverageGap, DEFAULT_SAMPLE_PAIRS, Granularity, HealthReport, TemporalTrends,
    bridge_notes, coverage_gaps, detect_clusters, health_metrics, temporal_trends,
};
use notegraph_core::{Cluster, Graph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

fn default_damping() -> f64 {
    PageRankParams::default().damping
}

fn default_iterations() -> usize {
    PageRankParams::default().iterations
}

fn default_max_passes() -> usize {
    DEFAULT_MAX_PASSES
}

fn default_sample_pairs() -> usize {
    DEFAULT_SAMPLE_PAIRS
}

/// One offloadable computation plus its parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum AnalyticsRequest {
    ShortestPath {
        source: String,
        target: String,
    },
    AllShortestPaths {
        source: String,
        target: String,
    },
    Betweenness,
    PageRank {
        #[serde(default = "default_damping")]
        damping: f64,
        #[serde(default = "default_iterations")]
        iterations: usize,
    },
    Communities {
        #[serde(default = "default_max_passes")]
        max_passes: usize,
    },
    Heatmap,
    Health {
        #[serde(default = "default_sample_pairs")]
        sample_pairs: usize,
    },
    Clusters {
        #[serde(default = "default_max_passes")]
        max_passes: usize,
    },
    CoverageGaps {
        #[serde(default)]
        top_n: Option<usize>,
    },
    Bridges {
        #[serde(default)]
        top_n: Option<usize>,
    },
    Temporal {
        granularity: Granularity,
    },
}

impl AnalyticsRequest {
    /// The operation tag this request serializes under.
    pub fn operation(&self) -> &'static str {
        match self {
            AnalyticsRequest::ShortestPath { .. } => "shortest-path",
            AnalyticsRequest::AllShortestPaths { .. } => "all-shortest-paths",
            AnalyticsRequest::Betweenness => "betweenness",
            AnalyticsRequest::PageRank { .. } => "page-rank",
            AnalyticsRequest::Communities { .. } => "communities",
            AnalyticsRequest::Heatmap => "heatmap",
            AnalyticsRequest::Health { .. } => "health",
            AnalyticsRequest::Clusters { .. } => "clusters",
            AnalyticsRequest::CoverageGaps { .. } => "coverage-gaps",
            AnalyticsRequest::Bridges { .. } => "bridges",
            AnalyticsRequest::Temporal { .. } => "temporal",
        }
    }

    /// Run this computation against a graph snapshot.
    ///
    /// Pure dispatch: the same call a caller would make directly, minus the
    /// channel plumbing. The worker invokes this inside a blocking task.
    pub fn execute(&self, graph: &Graph) -> AnalyticsResult {
        match self {
            AnalyticsRequest::ShortestPath { source, target } => {
                AnalyticsResult::ShortestPath {
                    path: shortest_path(graph, source, target),
                }
            }
            AnalyticsRequest::AllShortestPaths { source, target } => {
                AnalyticsResult::AllShortestPaths {
                    paths: all_shortest_paths(graph, source, target),
                }
            }
            AnalyticsRequest::Betweenness => AnalyticsResult::Betweenness {
                scores: betweenness_centrality(graph),
            },
            AnalyticsRequest::PageRank {
                damping,
                iterations,
            } => {
                let params = PageRankParams {
                    damping: *damping,
                    iterations: *iterations,
                };
                AnalyticsResult::PageRank {
                    scores: pagerank(graph, &params),
                }
            }
            AnalyticsRequest::Communities { max_passes } => AnalyticsResult::Communities {
                labels: detect_communities(graph, *max_passes),
            },
            AnalyticsRequest::Heatmap => AnalyticsResult::Heatmap {
                strengths: connection_heatmap(graph),
            },
            AnalyticsRequest::Health { sample_pairs } => AnalyticsResult::Health {
                report: health_metrics(graph, *sample_pairs),
            },
            AnalyticsRequest::Clusters { max_passes } => AnalyticsResult::Clusters {
                clusters: detect_clusters(graph, *max_passes),
            },
            AnalyticsRequest::CoverageGaps { top_n } => {
                let mut gaps = coverage_gaps(graph);
                if let Some(n) = top_n {
                    gaps.truncate(*n);
                }
                AnalyticsResult::CoverageGaps { gaps }
            }
            AnalyticsRequest::Bridges { top_n } => {
                let mut bridges = bridge_notes(graph);
                if let Some(n) = top_n {
                    bridges.truncate(*n);
                }
                AnalyticsResult::Bridges { bridges }
            }
            AnalyticsRequest::Temporal { granularity } => AnalyticsResult::Temporal {
                trends: temporal_trends(graph, *granularity),
            },
        }
    }
}

/// A successful result payload, one variant per request variant, tagged
/// with the same operation name as the request that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "operation", rename_all = "kebab-case")]
pub enum AnalyticsResult {
    ShortestPath {
        path: Option<Vec<String>>,
    },
    AllShortestPaths {
        paths: Vec<Vec<String>>,
    },
    Betweenness {
        scores: HashMap<String, f64>,
    },
    PageRank {
        scores: HashMap<String, f64>,
    },
    Communities {
        labels: HashMap<String, usize>,
    },
    Heatmap {
        strengths: HashMap<String, HashMap<String, u32>>,
    },
    Health {
        report: HealthReport,
    },
    Clusters {
        clusters: Vec<Cluster>,
    },
    CoverageGaps {
        gaps: Vec<CoverageGap>,
    },
    Bridges {
        bridges: Vec<BridgeNote>,
    },
    Temporal {
        trends: TemporalTrends,
    },
}

impl AnalyticsResult {
    /// The operation tag this result serializes under.
    pub fn operation(&self) -> &'static str {
        match self {
            AnalyticsResult::ShortestPath { .. } => "shortest-path",
            AnalyticsResult::AllShortestPaths { .. } => "all-shortest-paths",
            AnalyticsResult::Betweenness { .. } => "betweenness",
            AnalyticsResult::PageRank { .. } => "page-rank",
            AnalyticsResult::Communities { .. } => "communities",
            AnalyticsResult::Heatmap { .. } => "heatmap",
            AnalyticsResult::Health { .. } => "health",
            AnalyticsResult::Clusters { .. } => "clusters",
            AnalyticsResult::CoverageGaps { .. } => "coverage-gaps",
            AnalyticsResult::Bridges { .. } => "bridges",
            AnalyticsResult::Temporal { .. } => "temporal",
        }
    }
}

/// A worker reply: either a result payload or an error, both carrying the
/// originating request's operation tag under the `"operation"` key so
/// callers can route concurrently in-flight requests of different kinds.
///
/// The error wire form is `{ "operation": <request tag>, "error": <msg> }`.
/// Untagged deserialization is unambiguous: every result variant requires
/// its payload field, which an error reply lacks, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnalyticsResponse {
    Result(AnalyticsResult),
    Error { operation: String, error: String },
}

impl AnalyticsResponse {
    /// The operation this response answers. For [`AnalyticsResponse::Error`]
    /// this is the tag of the request that failed, not a separate tag.
    pub fn operation(&self) -> &str {
        match self {
            AnalyticsResponse::Result(result) => result.operation(),
            AnalyticsResponse::Error { operation, .. } => operation,
        }
    }

    /// Convert a worker-reported failure into a typed error, unwrapping the
    /// result payload otherwise.
    pub fn into_result(self) -> notegraph_core::Result<AnalyticsResult> {
        match self {
            AnalyticsResponse::Result(result) => Ok(result),
            AnalyticsResponse::Error { operation, error } => {
                Err(notegraph_core::Error::computation(operation, error))
            }
        }
    }
}
