//! Task poller
//!
//! Bridges a fire-and-forget message submission to its eventual reply: query
//! the status endpoint, and as long as the task is pending, wait one fixed
//! interval and query again. Polling stops the moment a terminal state is
//! observed, the wait budget runs out, or the caller cancels.
//!
//! Queries for one task are strictly sequential; the next one is only
//! scheduled after the previous response was processed, so requests never
//! pile up. Each submitted task gets its own independent loop; nothing here
//! deduplicates concurrent submissions.

use async_trait::async_trait;
use std::future;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{self, Instant};
use tracing::{debug, warn};

use crate::SolaceClient;
use crate::error::{ClientError, Result};
use solace_core::domain::session::Reply;
use solace_core::domain::task::{TaskId, TaskState};
use solace_core::dto::message::TaskStatusResponse;

/// Default gap between two status queries
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default total wait budget before a pending task is abandoned
pub const DEFAULT_MAX_WAIT: Duration = Duration::from_secs(300);

/// Polling parameters
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// Fixed delay between consecutive status queries
    pub interval: Duration,
    /// Total wait budget; `None` polls until a terminal state, however long
    /// that takes
    pub max_wait: Option<Duration>,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: Some(DEFAULT_MAX_WAIT),
        }
    }
}

impl PollConfig {
    /// Configuration matching the original frontend: poll every two seconds
    /// with no upper bound on the total wait
    pub fn unbounded() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_wait: None,
        }
    }
}

/// Source of task status, one query per call
///
/// Seam between the poll loop and the HTTP layer so the loop can be driven
/// by a scripted backend in tests.
#[async_trait]
pub trait TaskBackend: Send + Sync {
    /// Issue exactly one status query for the task
    async fn fetch_status(&self, task: &TaskId) -> Result<TaskStatusResponse>;
}

#[async_trait]
impl TaskBackend for SolaceClient {
    async fn fetch_status(&self, task: &TaskId) -> Result<TaskStatusResponse> {
        self.check_task(task).await
    }
}

/// Handle for abandoning an in-flight poll loop
///
/// Clonable; hand a copy to whatever decides the flow is over (a Ctrl-C
/// handler, a surrounding timeout, a UI teardown). Cancellation is observed
/// at the loop's next suspension point.
#[derive(Debug, Clone)]
pub struct CancelHandle {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelHandle {
    fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    /// Stop the associated poll loop
    pub fn cancel(&self) {
        // Receivers may already be gone if the loop finished first.
        let _ = self.tx.send(true);
    }

    fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }
}

/// Drives one task from submission handle to terminal resolution
pub struct TaskPoller {
    config: PollConfig,
    cancel: CancelHandle,
}

impl TaskPoller {
    /// Create a poller with the given parameters
    pub fn new(config: PollConfig) -> Self {
        Self {
            config,
            cancel: CancelHandle::new(),
        }
    }

    /// Get a handle that cancels this poller's loop
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    /// Poll the task until it resolves
    ///
    /// Outcomes:
    /// - backend reports `SUCCESS` with a reply payload: the reply.
    /// - backend reports `SUCCESS` with the invalid-key marker:
    ///   [`ClientError::InvalidApiKey`].
    /// - backend reports `FAILURE`: [`ClientError::TaskFailed`], immediately,
    ///   with no further queries.
    /// - any other state: still pending; wait one interval and query again.
    /// - wait budget exhausted while pending: [`ClientError::TimedOut`].
    /// - [`CancelHandle::cancel`] called: [`ClientError::Cancelled`].
    ///
    /// Transport errors from the backend abort the loop as-is; there is no
    /// retry at this layer.
    pub async fn poll<B>(&self, backend: &B, task: &TaskId) -> Result<Reply>
    where
        B: TaskBackend + ?Sized,
    {
        let started = Instant::now();
        let deadline = self.config.max_wait.map(|budget| started + budget);
        let mut cancelled = self.cancel.subscribe();

        loop {
            if *cancelled.borrow() {
                return Err(ClientError::Cancelled(task.clone()));
            }

            let status = backend.fetch_status(task).await?;
            match status.classify() {
                TaskState::Succeeded => {
                    debug!(%task, "task succeeded");
                    return match status.response {
                        Some(body) => body.into_reply().ok_or(ClientError::InvalidApiKey),
                        None => Err(ClientError::Parse(
                            "success response carried no payload".to_string(),
                        )),
                    };
                }
                TaskState::Failed => {
                    warn!(%task, "task failed");
                    return Err(ClientError::TaskFailed(task.clone()));
                }
                _ => {
                    debug!(%task, state = %status.state, "task still pending");
                }
            }

            tokio::select! {
                _ = time::sleep(self.config.interval) => {}
                _ = wait_until(deadline) => {
                    return Err(ClientError::TimedOut {
                        task: task.clone(),
                        waited: started.elapsed(),
                    });
                }
                changed = cancelled.changed() => {
                    if changed.is_ok() && *cancelled.borrow() {
                        return Err(ClientError::Cancelled(task.clone()));
                    }
                }
            }
        }
    }
}

/// Sleep until the deadline, or forever when there is none
async fn wait_until(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => future::pending().await,
    }
}
