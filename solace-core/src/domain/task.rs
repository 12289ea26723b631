//! Task domain types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque handle for an asynchronous chat task
///
/// Returned by the message submission endpoint and passed back verbatim on
/// every status query. The backend owns its structure; the client never
/// inspects it beyond using it as a correlation key for one polling session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for TaskId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Task lifecycle state as seen by the polling client
///
/// `Succeeded` and `Failed` come from the backend. `TimedOut` and `Cancelled`
/// are produced locally when the poll budget runs out or the caller abandons
/// the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskState {
    Pending,
    Succeeded,
    Failed,
    TimedOut,
    Cancelled,
}

impl TaskState {
    /// Whether polling must stop once this state is observed
    pub fn is_terminal(&self) -> bool {
        !matches!(self, TaskState::Pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_is_opaque_passthrough() {
        let id = TaskId::new("celery-abc-123");
        assert_eq!(id.as_str(), "celery-abc-123");
        assert_eq!(id.to_string(), "celery-abc-123");
    }

    #[test]
    fn test_terminal_states() {
        assert!(!TaskState::Pending.is_terminal());
        assert!(TaskState::Succeeded.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(TaskState::TimedOut.is_terminal());
        assert!(TaskState::Cancelled.is_terminal());
    }
}
