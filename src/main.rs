use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use mcp_github_activity::client::{ClientError, EventsClient, OctocrabEventsClient};
use mcp_github_activity::server::GithubActivityServer;
use rmcp::{transport::stdio, ServiceExt};
use tracing_subscriber::EnvFilter;

/// MCP server for GitHub user activity — lets LLMs see what a user has been up to
#[derive(Parser)]
#[command(name = "mcp-github-activity", version, about)]
struct Cli {
    /// GitHub personal access token.
    /// Can also be set via GITHUB_TOKEN environment variable.
    #[arg(long)]
    token: Option<String>,

    /// Read GitHub token from an environment variable.
    /// Default: GITHUB_TOKEN
    #[arg(long = "token-env")]
    token_env: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    // Resolve token: --token > --token-env > GITHUB_TOKEN
    let token = if let Some(t) = cli.token {
        Some(t)
    } else {
        let env_name = cli.token_env.as_deref().unwrap_or("GITHUB_TOKEN");
        match std::env::var(env_name) {
            Ok(t) if !t.is_empty() => {
                tracing::info!(env = env_name, "Read GitHub token from environment variable");
                Some(t)
            }
            _ => None,
        }
    };

    let github = if let Some(ref t) = token {
        octocrab::OctocrabBuilder::new()
            .personal_token(t.clone())
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create GitHub client: {}", e))?
    } else {
        tracing::warn!("No GitHub token provided — API rate limits will be very restrictive");
        octocrab::Octocrab::default()
    };

    tracing::info!(
        authenticated = token.is_some(),
        "Starting mcp-github-activity server"
    );

    let events_client: Arc<dyn EventsClient> = Arc::new(OctocrabEventsClient::new(github));
    let provider =
        move || -> Result<Arc<dyn EventsClient>, ClientError> { Ok(events_client.clone()) };

    let service = GithubActivityServer::new(Arc::new(provider));
    let running = service.serve(stdio()).await?;
    running.waiting().await?;

    Ok(())
}
