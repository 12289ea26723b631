//! API key command
//!
//! Prompts for a key, submits it for validation, and reports the outcome,
//! including the GPT-4 capability downgrade when the key lacks access.

use anyhow::{Context, Result, bail};
use colored::*;
use solace_core::domain::session::ChatModel;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::Config;

/// Prompt for and validate an API key
pub async fn run(config: &Config) -> Result<()> {
    print!("Enter your API key (used only to query the upstream API): ");
    std::io::stdout().flush()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let key = match lines.next_line().await? {
        Some(line) => line.trim().to_string(),
        None => String::new(),
    };
    if key.is_empty() {
        bail!("no API key entered");
    }

    let client = config.client();
    let validation = client
        .update_api_key(&key)
        .await
        .context("Failed to validate API key")?;

    if !validation.api_key_valid {
        println!("{}", "✗ Invalid API key".red());
        return Ok(());
    }

    println!("{}", "✓ API key accepted".green());

    if !validation.gpt4 {
        // Keep the backend in step with the downgraded session model.
        client
            .update_model(ChatModel::Gpt35)
            .await
            .context("Failed to switch model")?;
        println!(
            "{}",
            "This key has no GPT-4 access; falling back to GPT-3.5. Expect noticeably \
             weaker replies."
                .yellow()
        );
    }

    Ok(())
}
