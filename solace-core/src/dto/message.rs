//! Message submission and task status DTOs

use serde::{Deserialize, Serialize};

use crate::domain::session::Reply;
use crate::domain::task::TaskState;

/// Response of the message submission endpoint
///
/// The backend enqueues the conversation turn and hands back a correlation
/// key; the actual reply arrives later via the status endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitAccepted {
    pub task_id: String,
}

/// Response of the task status endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskStatusResponse {
    /// Free-form state label from the task queue
    pub state: String,
    /// Reply payload, present once the task succeeded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<ReplyBody>,
}

impl TaskStatusResponse {
    /// Classify the wire state label
    ///
    /// Only `SUCCESS` and `FAILURE` are terminal. Every other label the queue
    /// may emit (`PENDING`, `STARTED`, `RETRY`, anything unrecognized) means
    /// the task is still in flight.
    pub fn classify(&self) -> TaskState {
        match self.state.as_str() {
            "SUCCESS" => TaskState::Succeeded,
            "FAILURE" => TaskState::Failed,
            _ => TaskState::Pending,
        }
    }
}

/// Body of a successful task response
///
/// The backend reuses the `response` field for two shapes: the reply message
/// object, or a bare `false` meaning the configured upstream API key was
/// rejected. The latter is an expected, recoverable condition, not a task
/// failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Message(ReplyMessage),
    InvalidKey(bool),
}

impl ReplyBody {
    /// The reply, unless this body is the invalid-key marker
    pub fn into_reply(self) -> Option<Reply> {
        match self {
            ReplyBody::Message(m) => Some(Reply {
                text: m.response,
                user_name: m.user_name,
            }),
            ReplyBody::InvalidKey(_) => None,
        }
    }
}

/// Reply message payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyMessage {
    /// Rendered reply text
    pub response: String,
    /// Name the assistant picked up for the user, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_accepted_parses() {
        let accepted: SubmitAccepted =
            serde_json::from_str(r#"{"task_id": "d9a1b2c3"}"#).unwrap();
        assert_eq!(accepted.task_id, "d9a1b2c3");
    }

    #[test]
    fn test_classify_terminal_states() {
        let success: TaskStatusResponse =
            serde_json::from_str(r#"{"state": "SUCCESS"}"#).unwrap();
        assert_eq!(success.classify(), TaskState::Succeeded);

        let failure: TaskStatusResponse =
            serde_json::from_str(r#"{"state": "FAILURE"}"#).unwrap();
        assert_eq!(failure.classify(), TaskState::Failed);
    }

    #[test]
    fn test_classify_everything_else_as_pending() {
        for label in ["PENDING", "STARTED", "RETRY", "something-new", ""] {
            let status = TaskStatusResponse {
                state: label.to_string(),
                response: None,
            };
            assert_eq!(status.classify(), TaskState::Pending, "label {:?}", label);
        }
    }

    #[test]
    fn test_success_payload_carries_reply_text() {
        let status: TaskStatusResponse = serde_json::from_str(
            r#"{"state": "SUCCESS", "response": {"response": "Hello"}}"#,
        )
        .unwrap();

        let reply = status.response.unwrap().into_reply().unwrap();
        assert_eq!(reply.text, "Hello");
        assert_eq!(reply.user_name, None);
    }

    #[test]
    fn test_success_payload_with_user_name() {
        let status: TaskStatusResponse = serde_json::from_str(
            r#"{"state": "SUCCESS", "response": {"response": "Hi Bob", "user_name": "Bob"}}"#,
        )
        .unwrap();

        let reply = status.response.unwrap().into_reply().unwrap();
        assert_eq!(reply.user_name.as_deref(), Some("Bob"));
    }

    #[test]
    fn test_false_response_is_invalid_key_marker_not_a_reply() {
        let status: TaskStatusResponse =
            serde_json::from_str(r#"{"state": "SUCCESS", "response": false}"#).unwrap();

        let body = status.response.unwrap();
        assert!(matches!(body, ReplyBody::InvalidKey(false)));
        assert!(body.into_reply().is_none());
    }
}
