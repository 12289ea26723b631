//! Message submission and task status endpoints

use tracing::debug;

use crate::SolaceClient;
use crate::error::Result;
use solace_core::domain::task::TaskId;
use solace_core::dto::message::{SubmitAccepted, TaskStatusResponse};

impl SolaceClient {
    /// Submit a chat message for asynchronous processing
    ///
    /// The backend enqueues the turn and answers with a task id; the reply is
    /// fetched later via [`check_task`](Self::check_task) or driven end to end
    /// by a [`TaskPoller`](crate::TaskPoller).
    ///
    /// The text is forwarded verbatim. Guarding against empty or
    /// whitespace-only input is the caller's responsibility; nothing is
    /// validated here.
    pub async fn submit_message(&self, text: &str) -> Result<TaskId> {
        let response = self
            .post_form("api/message/", &[("input_text", text)])
            .await?;

        let accepted: SubmitAccepted = self.handle_response(response).await?;
        debug!(task_id = %accepted.task_id, "message accepted");

        Ok(TaskId::new(accepted.task_id))
    }

    /// Query the current status of a submitted task
    ///
    /// One status query, no waiting. The task id is passed back verbatim as
    /// the correlation key.
    pub async fn check_task(&self, task: &TaskId) -> Result<TaskStatusResponse> {
        let response = self
            .post_form("api/task-status/", &[("task_id", task.as_str())])
            .await?;

        self.handle_response(response).await
    }
}
