//! Gavel Server - comment moderation API.
//!
//! This binary wires the moderation core to an axum HTTP boundary over
//! an in-memory comment repository, optionally seeded from a TOML
//! configuration file.

use clap::Parser;
use gavel_moderation::CommentModerator;
use gavel_policy::AccessPolicy;
use gavel_server::{AppState, ServerConfig, create_router};
use gavel_storage::InMemoryCommentRepository;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the moderation server.
#[derive(Parser, Debug)]
#[command(name = "gavel-server")]
#[command(about = "Gavel - comment moderation API")]
#[command(version)]
struct Args {
    /// Path to server configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Socket address to bind
    #[arg(long, env = "GAVEL_BIND_ADDR")]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting Gavel moderation server");

    let mut config = match &args.config {
        Some(path) => {
            info!(config_file = ?path, "Loading configuration");
            ServerConfig::from_file(path)?
        }
        None => ServerConfig::from_env()?,
    };
    if let Some(bind) = args.bind {
        config = gavel_server::ServerConfigBuilder::default()
            .bind_addr(bind)
            .seed_comments(config.seed_comments().clone())
            .build()?;
    }

    let repository = Arc::new(InMemoryCommentRepository::new());
    for seed in config.seed_comments() {
        repository.insert(seed.clone().into()).await;
    }
    info!(
        seeded = config.seed_comments().len(),
        "Repository initialized"
    );

    let state = AppState::new(
        CommentModerator::new(repository),
        AccessPolicy::new(),
    );
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %config.bind_addr(), "Listening");
    axum::serve(listener, router).await?;

    Ok(())
}
