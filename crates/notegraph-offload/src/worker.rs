//! Background worker that runs analytics off the interactive path.
//!
//! One worker owns one request queue and processes it strictly in order,
//! one computation at a time. The actual number crunching happens on the
//! blocking thread pool so the async runtime stays responsive. Callers
//! hold a cheap cloneable [`WorkerHandle`]; spawning several workers gives
//! several independent queues.

use crate::envelope::{AnalyticsRequest, AnalyticsResponse};
use notegraph_core::{Error, Graph, Result};
use tokio::sync::{mpsc, oneshot};

/// Queue depth before `submit` applies backpressure.
const QUEUE_CAPACITY: usize = 32;

struct Job {
    graph: Graph,
    request: AnalyticsRequest,
    reply: oneshot::Sender<AnalyticsResponse>,
}

/// Spawner for background analytics workers.
pub struct AnalyticsWorker;

impl AnalyticsWorker {
    /// Spawn a worker task and return a handle for submitting requests.
    ///
    /// The worker runs until every clone of the returned handle is dropped,
    /// then drains nothing further and exits.
    pub fn spawn() -> WorkerHandle {
        let (tx, rx) = mpsc::channel(QUEUE_CAPACITY);
        tokio::spawn(run(rx));
        WorkerHandle { tx }
    }
}

/// Sending half of a worker's request queue.
#[derive(Clone)]
pub struct WorkerHandle {
    tx: mpsc::Sender<Job>,
}

impl WorkerHandle {
    /// Submit one computation over a graph snapshot and await its result.
    ///
    /// The snapshot is moved into the worker, so callers are free to keep
    /// mutating their builder while the computation runs. Requests queue
    /// behind each other; a slow computation delays everything after it on
    /// the same handle.
    #[tracing::instrument(skip_all, fields(operation = request.operation()))]
    pub async fn submit(
        &self,
        graph: Graph,
        request: AnalyticsRequest,
    ) -> Result<AnalyticsResponse> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Job {
                graph,
                request,
                reply,
            })
            .await
            .map_err(|_| Error::worker_unavailable("analytics worker has shut down"))?;
        response
            .await
            .map_err(|_| Error::worker_unavailable("analytics worker dropped the reply"))
    }
}

async fn run(mut rx: mpsc::Receiver<Job>) {
    while let Some(job) = rx.recv().await {
        let Job {
            graph,
            request,
            reply,
        } = job;
        let operation = request.operation();
        tracing::debug!(operation, nodes = graph.nodes.len(), "running analytics job");

        let outcome =
            tokio::task::spawn_blocking(move || request.execute(&graph)).await;
        let response = match outcome {
            Ok(result) => AnalyticsResponse::Result(result),
            Err(join_error) => {
                log::error!("analytics job '{operation}' aborted: {join_error}");
                AnalyticsResponse::Error {
                    operation: operation.to_string(),
                    error: join_error.to_string(),
                }
            }
        };

        // The submitter may have given up waiting; that is not our problem.
        let _ = reply.send(response);
    }
    tracing::debug!("analytics worker exiting: all handles dropped");
}
