use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use client_core::HttpChatTransport;
use planner_ui::{
    dom::{ChatEntry, ValueField},
    headless::{HeadlessElement, HeadlessLog},
    ChatWidget, SendOutcome,
};
use shared::domain::ChatRole;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

use config::load_settings;

/// Talks to the planner's `/chat` endpoint from a terminal, one line per message.
#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to `planner_chat.toml` when present.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    server_url: Option<String>,
    #[arg(long)]
    destination: Option<String>,
    #[arg(long)]
    days: Option<String>,
    /// Send this message, print the reply, and exit.
    #[arg(long)]
    message: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(v) = args.server_url {
        settings.server_url = v;
    }
    if args.destination.is_some() {
        settings.destination = args.destination;
    }
    if args.days.is_some() {
        settings.days = args.days;
    }

    let transport = HttpChatTransport::for_origin(&settings.server_url)
        .context("cannot build chat endpoint")?;
    info!(endpoint = %transport.endpoint(), "chat endpoint resolved");

    let input = HeadlessElement::new();
    let log = HeadlessLog::new();
    let widget = ChatWidget::new(
        HeadlessElement::new(),
        input.clone(),
        log.clone(),
        transport,
        settings.chat_context(),
    );
    widget.open();

    if let Some(message) = args.message {
        input.set_value(&message);
        let outcome = widget.send_message().await;
        print_entries(&log.entries());
        if let SendOutcome::Failed(err) = outcome {
            return Err(err).context("chat request failed");
        }
        return Ok(());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let before = log.len();
        input.set_value(&line);
        widget.send_message().await;
        print_entries(&log.entries()[before..]);
    }

    Ok(())
}

fn print_entries(entries: &[ChatEntry]) {
    for entry in entries {
        let speaker = match entry.role {
            ChatRole::User => "you",
            ChatRole::Bot => "bot",
        };
        println!("{speaker}> {}", entry.text);
    }
}
