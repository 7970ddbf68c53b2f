//! Temporal-trend analysis over note timestamps.

use chrono::{DateTime, Datelike, Utc};
use notegraph_core::Graph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bucketing granularity for temporal analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Day,
    Week,
    Month,
}

impl Granularity {
    /// Bucket key for a timestamp. Keys sort chronologically as strings.
    fn bucket_key(&self, ts: &DateTime<Utc>) -> String {
        match self {
            Granularity::Day => ts.format("%Y-%m-%d").to_string(),
            Granularity::Week => {
                let week = ts.iso_week();
                format!("{:04}-W{:02}", week.year(), week.week())
            }
            Granularity::Month => ts.format("%Y-%m").to_string(),
        }
    }
}

/// Counts for one time bucket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalBucket {
    /// Bucket label, e.g. `2026-08-23`, `2026-W34`, or `2026-08`
    pub bucket: String,
    /// Notes created in this bucket
    pub created: usize,
    /// Notes last modified in this bucket
    pub modified: usize,
}

/// Temporal trend report: chronologically ordered buckets plus a moving
/// average over creation counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemporalTrends {
    pub granularity: Granularity,
    pub buckets: Vec<TemporalBucket>,
    /// Trailing moving average (window 3) of `created`, one per bucket
    pub created_moving_average: Vec<f64>,
}

/// Bucket note creation/modification timestamps at the given granularity.
///
/// Pure aggregation over node timestamps; no graph traversal. Buckets with
/// no activity between the first and last are not synthesized — only
/// observed buckets appear, in chronological order.
pub fn temporal_trends(graph: &Graph, granularity: Granularity) -> TemporalTrends {
    let mut created: BTreeMap<String, usize> = BTreeMap::new();
    let mut modified: BTreeMap<String, usize> = BTreeMap::new();

    for node in &graph.nodes {
        *created.entry(granularity.bucket_key(&node.created)).or_insert(0) += 1;
        *modified.entry(granularity.bucket_key(&node.modified)).or_insert(0) += 1;
    }

    // Union of bucket keys, already sorted by the BTreeMap.
    let mut keys: Vec<String> = created.keys().cloned().collect();
    for key in modified.keys() {
        if !keys.contains(key) {
            keys.push(key.clone());
        }
    }
    keys.sort();

    let buckets: Vec<TemporalBucket> = keys
        .into_iter()
        .map(|bucket| {
            let c = created.get(&bucket).copied().unwrap_or(0);
            let m = modified.get(&bucket).copied().unwrap_or(0);
            TemporalBucket {
                bucket,
                created: c,
                modified: m,
            }
        })
        .collect();

    let created_moving_average = moving_average(&buckets, 3);

    TemporalTrends {
        granularity,
        buckets,
        created_moving_average,
    }
}

/// Trailing moving average of creation counts.
fn moving_average(buckets: &[TemporalBucket], window: usize) -> Vec<f64> {
    buckets
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let start = i.saturating_sub(window - 1);
            let slice = &buckets[start..=i];
            slice.iter().map(|b| b.created).sum::<usize>() as f64 / slice.len() as f64
        })
        .collect()
}
