//! Configuration module
//!
//! Handles CLI configuration including backend URL and polling settings.

use solace_client::{PollConfig, SolaceClient};
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// URL of the backend service
    pub base_url: String,
    /// Anti-forgery token, when the deployment requires one
    pub csrf_token: Option<String>,
    /// Delay between task status queries
    pub poll_interval: Duration,
    /// Total wait budget per task; `None` waits forever
    pub max_wait: Option<Duration>,
}

impl Config {
    /// Build a backend client from this configuration
    pub fn client(&self) -> SolaceClient {
        let client = SolaceClient::new(&self.base_url);
        match &self.csrf_token {
            Some(token) => client.csrf_token(token),
            None => client,
        }
    }

    /// Polling parameters from this configuration
    pub fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: self.poll_interval,
            max_wait: self.max_wait,
        }
    }
}
