//! Session domain types
//!
//! The original frontend tracked the user name and API-key validity in ambient
//! mutable globals. Here the whole per-conversation state is one explicit value
//! that operations take and update, so nothing couples across calls invisibly.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Backend language model selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChatModel {
    Gpt4,
    Gpt35,
}

impl ChatModel {
    /// Name the backend expects in the model-update request
    pub fn wire_name(&self) -> &'static str {
        match self {
            ChatModel::Gpt4 => "GPT4",
            ChatModel::Gpt35 => "GPT3.5",
        }
    }
}

impl Default for ChatModel {
    fn default() -> Self {
        ChatModel::Gpt4
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatModel::Gpt4 => write!(f, "GPT-4"),
            ChatModel::Gpt35 => write!(f, "GPT-3.5"),
        }
    }
}

impl FromStr for ChatModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "gpt4" | "gpt-4" => Ok(ChatModel::Gpt4),
            "gpt3.5" | "gpt-3.5" | "gpt35" => Ok(ChatModel::Gpt35),
            other => Err(format!("unknown model '{}' (expected gpt4 or gpt3.5)", other)),
        }
    }
}

/// A resolved chat reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// Rendered reply text
    pub text: String,
    /// Name the assistant adopted for the user, when it picked one up
    pub user_name: Option<String>,
}

/// Explicit per-conversation state
///
/// Passed to and updated by the CLI command handlers; never global.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Name the assistant uses for the user, once known
    pub user_name: Option<String>,
    /// Whether the last submitted API key validated successfully
    pub api_key_valid: bool,
    /// Whether the validated key has GPT-4 access
    pub gpt4_available: bool,
    /// Currently selected model
    pub model: ChatModel,
    /// Whether the conversation opener has already been sent
    pub first_message_sent: bool,
}

impl SessionState {
    /// Fold a reply into the session, adopting the user name if one arrived
    pub fn apply_reply(&mut self, reply: &Reply) {
        if let Some(name) = &reply.user_name {
            self.user_name = Some(name.clone());
        }
    }

    /// Fold an API-key validation result into the session
    pub fn apply_key_validation(&mut self, api_key_valid: bool, gpt4: bool) {
        self.api_key_valid = api_key_valid;
        self.gpt4_available = gpt4;
        if api_key_valid && !gpt4 {
            self.model = ChatModel::Gpt35;
        }
    }

    /// Prompt label: the adopted name, or "user" until one is known
    pub fn display_name(&self) -> &str {
        self.user_name.as_deref().unwrap_or("user")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_wire_names() {
        assert_eq!(ChatModel::Gpt4.wire_name(), "GPT4");
        assert_eq!(ChatModel::Gpt35.wire_name(), "GPT3.5");
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!("gpt4".parse::<ChatModel>().unwrap(), ChatModel::Gpt4);
        assert_eq!("GPT-4".parse::<ChatModel>().unwrap(), ChatModel::Gpt4);
        assert_eq!("gpt3.5".parse::<ChatModel>().unwrap(), ChatModel::Gpt35);
        assert!("davinci".parse::<ChatModel>().is_err());
    }

    #[test]
    fn test_session_adopts_user_name_from_reply() {
        let mut session = SessionState::default();
        assert_eq!(session.display_name(), "user");

        session.apply_reply(&Reply {
            text: "Nice to meet you".to_string(),
            user_name: Some("Alice".to_string()),
        });
        assert_eq!(session.display_name(), "Alice");

        // A reply without a name keeps the adopted one
        session.apply_reply(&Reply {
            text: "How are you?".to_string(),
            user_name: None,
        });
        assert_eq!(session.display_name(), "Alice");
    }

    #[test]
    fn test_key_validation_downgrades_model_without_gpt4() {
        let mut session = SessionState::default();
        assert_eq!(session.model, ChatModel::Gpt4);

        session.apply_key_validation(true, false);
        assert!(session.api_key_valid);
        assert!(!session.gpt4_available);
        assert_eq!(session.model, ChatModel::Gpt35);
    }

    #[test]
    fn test_invalid_key_leaves_model_untouched() {
        let mut session = SessionState::default();
        session.apply_key_validation(false, false);
        assert!(!session.api_key_valid);
        assert_eq!(session.model, ChatModel::Gpt4);
    }
}
