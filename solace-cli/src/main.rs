//! Solace CLI
//!
//! Terminal frontend for the Solace chat backend: an interactive chat loop
//! plus settings commands (model selection, API key, session export).

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "solace")]
#[command(about = "Solace chat CLI", long_about = None)]
struct Cli {
    /// Backend URL
    #[arg(long, env = "SOLACE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    /// Anti-forgery token to send with every request
    #[arg(long, env = "SOLACE_CSRF_TOKEN")]
    csrf_token: Option<String>,

    /// Delay between task status queries, in milliseconds
    #[arg(long, default_value_t = 2000)]
    poll_interval_ms: u64,

    /// Give up on a pending task after this many seconds (0 = wait forever)
    #[arg(long, default_value_t = 300)]
    timeout_secs: u64,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solace_cli=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config {
        base_url: cli.base_url,
        csrf_token: cli.csrf_token,
        poll_interval: Duration::from_millis(cli.poll_interval_ms),
        max_wait: match cli.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        },
    };

    handle_command(cli.command, &config).await
}
