//! StudyAI service entry point.
//!
//! Configuration comes from `STUDYAI_*` environment variables; see
//! `ServerConfig::from_env`.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use server::{ServerConfig, StudyServer};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("Starting StudyAI service");
    if let Some(seed) = config.seed {
        info!("Using fixed RNG seed {}", seed);
    }

    let server = StudyServer::new(config)?;
    server.start().await?;

    Ok(())
}
