//! Bot process entry point.
//!
//! Validates startup configuration, then drives the dispatcher from a
//! console front. The console stands in for the messaging-platform
//! transport, which is an external collaborator: lines starting with `/`
//! are commands, lines starting with `cb:` simulate button callbacks, and
//! everything else is message text.

use anyhow::Result;
use cadenza::config::BotConfig;
use cadenza::dispatch::{BotEnv, Dispatcher, Inbound, Reply};
use cadenza::session::UserId;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "startup failed");
            std::process::exit(1);
        }
    };

    info!("cadenza starting");
    // The console front has no transport to hand the token to; it is
    // validated here for parity with production startup.
    let _ = config.token();

    let dispatcher = Dispatcher::new(BotEnv::in_memory());
    if let Err(err) = run_console(&dispatcher).await {
        error!(error = %err, "console loop failed");
        std::process::exit(1);
    }
}

async fn run_console(dispatcher: &Dispatcher) -> Result<()> {
    let user = UserId(0);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let inbound = parse_line(line);
        for reply in dispatcher.handle(user, &inbound).await {
            print_reply(&reply);
        }
    }
    info!("input closed, shutting down");
    Ok(())
}

fn parse_line(line: &str) -> Inbound {
    if let Some(command) = line.strip_prefix('/') {
        Inbound::Command(command.to_string())
    } else if let Some(payload) = line.strip_prefix("cb:") {
        Inbound::Callback(payload.trim().to_string())
    } else {
        Inbound::Text(line.to_string())
    }
}

fn print_reply(reply: &Reply) {
    println!("{}", reply.text);
    if let Some(keyboard) = &reply.keyboard {
        for row in &keyboard.rows {
            let labels: Vec<String> = row.iter().map(|b| format!("[{}]", b.label)).collect();
            println!("  {}", labels.join(" "));
        }
    }
}
