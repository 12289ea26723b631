//! Solace HTTP Client
//!
//! A typed HTTP client for the Solace chat backend, including the task poller
//! that bridges fire-and-forget message submission to the eventual reply.
//!
//! The backend accepts a chat turn, enqueues it, and answers with an opaque
//! task id; the reply is later fetched by polling the status endpoint until
//! the task reaches a terminal state.
//!
//! # Example
//!
//! ```no_run
//! use solace_client::SolaceClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), solace_client::ClientError> {
//!     let client = SolaceClient::new("http://localhost:8000");
//!
//!     let reply = client.send_message("I had a rough week").await?;
//!     println!("{}", reply.text);
//!     Ok(())
//! }
//! ```

pub mod error;
mod messages;
pub mod poller;
mod settings;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use poller::{CancelHandle, PollConfig, TaskPoller};

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;
use solace_core::domain::session::Reply;

/// Header carrying the anti-forgery token the surrounding page hands out
const CSRF_HEADER: &str = "X-CSRFToken";

/// HTTP client for the Solace backend API
///
/// This client provides methods for all backend endpoints, organized into
/// logical groups:
/// - Message submission and task status polling
/// - Model selection
/// - API key validation
/// - Session data export
#[derive(Debug, Clone)]
pub struct SolaceClient {
    /// Base URL of the backend (e.g., "http://localhost:8000")
    base_url: String,
    /// HTTP client instance
    client: Client,
    /// Anti-forgery token, sent on every request when configured
    csrf_token: Option<String>,
}

impl SolaceClient {
    /// Create a new backend client
    ///
    /// # Arguments
    /// * `base_url` - The base URL of the backend API (e.g., "http://localhost:8000")
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            csrf_token: None,
        }
    }

    /// Create a new backend client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            csrf_token: None,
        }
    }

    /// Set the anti-forgery token to send with every request
    ///
    /// How the token is obtained is the caller's concern; the client only
    /// relays it.
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Get the base URL of the backend
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submit a message and poll until the reply is ready
    ///
    /// The full turn as one linear sequence: submit, poll until terminal,
    /// surface the reply. Uses the default [`PollConfig`]; build a
    /// [`TaskPoller`] directly for custom intervals, budgets, or a cancel
    /// handle.
    pub async fn send_message(&self, text: &str) -> Result<Reply> {
        let task = self.submit_message(text).await?;
        TaskPoller::new(PollConfig::default()).poll(self, &task).await
    }

    // =============================================================================
    // Request plumbing
    // =============================================================================

    /// POST a form-encoded body to an endpoint path
    async fn post_form<F: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &F,
    ) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.post(&url).form(form);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        Ok(request.send().await?)
    }

    /// GET an endpoint path
    async fn get(&self, path: &str) -> Result<reqwest::Response> {
        let url = format!("{}/{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(token) = &self.csrf_token {
            request = request.header(CSRF_HEADER, token);
        }
        Ok(request.send().await?)
    }

    /// Handle an API response and deserialize JSON
    ///
    /// This method checks the status code and returns an appropriate error if
    /// the request failed, or deserializes the response body if successful.
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api_error(status.as_u16(), error_text));
        }

        response
            .json()
            .await
            .map_err(|e| ClientError::Parse(format!("Failed to parse JSON response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = SolaceClient::new("http://localhost:8000");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = SolaceClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_client_with_custom_client() {
        let http_client = Client::new();
        let client = SolaceClient::with_client("http://localhost:8000", http_client);
        assert_eq!(client.base_url(), "http://localhost:8000");
    }
}
