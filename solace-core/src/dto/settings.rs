//! Settings and export DTOs

use serde::{Deserialize, Serialize};

/// Result of validating a submitted API key
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ApiKeyValidation {
    /// Whether the key authenticated against the upstream API
    pub api_key_valid: bool,
    /// Whether the key has GPT-4 access
    pub gpt4: bool,
}

/// Response envelope of the API-key update endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiKeyResponse {
    pub response: ApiKeyValidation,
}

/// Response envelope of the model update endpoint
///
/// Carries only a confirmation string; callers discard it after the status
/// check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelUpdateResponse {
    pub response: String,
}

/// Session data export blob
///
/// The backend returns the stored conversation parameters as-is; the client
/// treats the payload as opaque JSON and only writes it to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionExport {
    pub response: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_key_response_parses_nested_flags() {
        let resp: ApiKeyResponse = serde_json::from_str(
            r#"{"response": {"api_key_valid": true, "gpt4": false}}"#,
        )
        .unwrap();
        assert!(resp.response.api_key_valid);
        assert!(!resp.response.gpt4);
    }

    #[test]
    fn test_session_export_payload_is_opaque() {
        let export: SessionExport = serde_json::from_str(
            r#"{"response": {"messages": [], "only_fast_model": false}}"#,
        )
        .unwrap();
        assert!(export.response.get("messages").is_some());
    }
}
