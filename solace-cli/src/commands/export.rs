//! Session data export command

use anyhow::{Context, Result};
use colored::*;
use serde_json::json;
use std::path::PathBuf;

use crate::config::Config;

const DEFAULT_OUTPUT: &str = "solace-session-data.json";

/// Download the stored session data and write it to a JSON file
pub async fn run(config: &Config, output: Option<PathBuf>) -> Result<()> {
    let client = config.client();
    let export = client
        .download_data()
        .await
        .context("Failed to download session data")?;

    let path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let document = json!({
        "exported_at": chrono::Utc::now().to_rfc3339(),
        "data": export.response,
    });

    let pretty =
        serde_json::to_string_pretty(&document).context("Failed to serialize session data")?;
    std::fs::write(&path, pretty)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!(
        "{}",
        format!("✓ Session data written to {}", path.display()).green()
    );
    Ok(())
}
