//! Model selection command

use anyhow::{Context, Result, anyhow};
use colored::*;
use solace_core::domain::session::ChatModel;

use crate::config::Config;

/// Select the backend model
pub async fn run(config: &Config, model: &str) -> Result<()> {
    let model: ChatModel = model.parse().map_err(|e: String| anyhow!(e))?;

    let client = config.client();
    client
        .update_model(model)
        .await
        .context("Failed to update model")?;

    println!("{}", format!("✓ Model set to {}", model).green());
    Ok(())
}
