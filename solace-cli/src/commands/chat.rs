//! Interactive chat command
//!
//! Plays the role of the original web page: read a line, submit it, poll the
//! task until the reply arrives, print it. Session state (adopted user name,
//! key validity, model) lives in one explicit value for the duration of the
//! loop.

use anyhow::Result;
use colored::*;
use solace_client::{ClientError, SolaceClient, TaskPoller};
use solace_core::domain::session::{Reply, SessionState};
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::error;

use crate::config::Config;

/// Hidden first message; its reply is the assistant's greeting
const OPENER: &str = "Start_conversation";

const DISCLAIMER: &str = "Solace is a research experiment, not a medical tool. It is not a \
substitute for professional mental health care. If you need support, seek help from a \
qualified professional. Use at your own discretion.";

/// Run the interactive chat loop
pub async fn run(config: &Config) -> Result<()> {
    let client = config.client();
    let mut session = SessionState::default();

    println!("{}", DISCLAIMER.dimmed());
    println!();

    // Conversation opener. The backend lets the first message through even
    // without a configured key, so a key notice here is informational only.
    match exchange(&client, config, OPENER).await {
        Ok(reply) => {
            session.apply_reply(&reply);
            print_reply(&reply);
        }
        Err(ClientError::InvalidApiKey) => print_key_notice(),
        Err(err) => report_failure("greeting", &err),
    }
    session.first_message_sent = true;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        prompt(&session)?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let Some(message) = sanitize_input(&line) else {
            continue;
        };
        if message == "/quit" || message == "/exit" {
            break;
        }

        match exchange(&client, config, message).await {
            Ok(reply) => {
                session.apply_reply(&reply);
                print_reply(&reply);
            }
            Err(ClientError::InvalidApiKey) => {
                session.apply_key_validation(false, false);
                print_key_notice();
            }
            // Transport and task failures abandon this message's flow; the
            // next line starts fresh.
            Err(err) => report_failure("message", &err),
        }
    }

    println!("{}", "Goodbye.".dimmed());
    Ok(())
}

/// One full turn: submit, then poll until terminal
async fn exchange(
    client: &SolaceClient,
    config: &Config,
    text: &str,
) -> solace_client::Result<Reply> {
    let task = client.submit_message(text).await?;
    TaskPoller::new(config.poll_config()).poll(client, &task).await
}

/// Trim the raw line; empty or whitespace-only input never reaches submit
fn sanitize_input(line: &str) -> Option<&str> {
    let trimmed = line.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}

fn prompt(session: &SessionState) -> Result<()> {
    print!("{} ", format!("{}>", session.display_name()).green().bold());
    std::io::stdout().flush()?;
    Ok(())
}

fn print_reply(reply: &Reply) {
    println!("{} {}", "Solace:".cyan().bold(), reply.text);
}

fn print_key_notice() {
    println!(
        "{}",
        "Please provide a valid API key with `solace api-key`.".yellow()
    );
}

fn report_failure(stage: &str, err: &ClientError) {
    error!(stage, %err, "chat turn failed");
    println!("{}", format!("({} failed: {})", stage, err).red().dimmed());
}
