//! agendash CLI entry point.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use url::Url;

use agendash_api::{DashboardClient, Session};
use agendash_client::cli::{Cli, Command, parse_month};
use agendash_client::commands;
use agendash_client::config::ClientConfig;
use agendash_client::error::{ClientError, ClientResult};
use agendash_core::{MonthCursor, TracingConfig, init_tracing};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> ClientResult<()> {
    // Load configuration
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(ClientError::Config)?
    } else {
        ClientConfig::load().unwrap_or_default()
    };

    let tracing_config = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    init_tracing(tracing_config).map_err(|e| ClientError::Config(e.to_string()))?;
    tracing::debug!(?config, "loaded configuration");

    // Session init-on-load: the token comes from the environment; the
    // auth collaborator owns how it got there.
    let session = match std::env::var("AGENDASH_TOKEN") {
        Ok(token) if !token.is_empty() => Arc::new(Session::with_token(token)),
        _ => Arc::new(Session::anonymous()),
    };

    let base_url = cli
        .base_url
        .unwrap_or_else(|| config.server.base_url.clone());
    let base_url =
        Url::parse(&base_url).map_err(|e| ClientError::Usage(format!("invalid base URL: {}", e)))?;

    let client = DashboardClient::new(
        base_url,
        session,
        Duration::from_secs(config.server.timeout),
    );

    let today = Local::now().date_naive();
    let cursor = match cli.month {
        Some(ref month) => parse_month(month).map_err(ClientError::Usage)?,
        None => MonthCursor::from_date(today),
    };
    let limit = cli.limit.unwrap_or(config.display.upcoming_limit);

    match cli.command {
        Some(Command::Upcoming { json }) => {
            commands::upcoming(&client, cursor, today, limit, json).await
        }
        Some(Command::Add {
            date,
            title,
            category,
            time,
            memo,
        }) => commands::add(&client, date, title, category, time, memo).await,
        Some(Command::Remove { id }) => commands::remove(&client, id).await,
        Some(Command::Show) | None => commands::show(&client, cursor, today, limit).await,
    }
}
