//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod api_key;
mod chat;
mod export;
mod model;

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive chat session
    Chat,
    /// Select the backend model
    Model {
        /// Model to use (gpt4 or gpt3.5)
        model: String,
    },
    /// Submit an API key for validation
    ApiKey,
    /// Download the stored session data as JSON
    Export {
        /// Output file (default: solace-session-data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Chat => chat::run(config).await,
        Commands::Model { model } => model::run(config, &model).await,
        Commands::ApiKey => api_key::run(config).await,
        Commands::Export { output } => export::run(config, output).await,
    }
}
