//! Server instance management

use anyhow::{anyhow, Context, Result};
use tokio::signal;
use tracing::{error, info};

use crate::config::ServerConfig;
use crate::engine::{EngineConfig, StudyEngine};
use crate::handlers::{create_router, AppState};

/// StudyAI HTTP server
///
/// Owns the configuration and the engine; `start` binds the listener and
/// serves until Ctrl+C or SIGTERM.
pub struct StudyServer {
    config: ServerConfig,
    engine: StudyEngine,
}

impl StudyServer {
    /// Create new server instance with the default engine
    pub fn new(config: ServerConfig) -> Result<Self> {
        Self::with_engine(config, EngineConfig::default())
    }

    /// Create new server instance with a custom engine configuration
    pub fn with_engine(config: ServerConfig, engine_config: EngineConfig) -> Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow!("Invalid server config: {}", e))?;
        engine_config
            .validate()
            .context("Invalid engine config")?;

        Ok(Self {
            config,
            engine: StudyEngine::new(engine_config),
        })
    }

    /// Get server URL
    #[must_use]
    pub fn server_url(&self) -> String {
        self.config.server_url()
    }

    /// Start server and block until shutdown
    pub async fn start(&self) -> Result<()> {
        let addr = self
            .config
            .socket_addr()
            .map_err(|e| anyhow!("{}", e))?;

        let state = AppState::new(self.engine.clone(), self.config.random_source());
        let app = create_router(state);

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind to {}", addr))?;

        info!("StudyAI service listening on {}", self.server_url());
        info!("Available endpoints:");
        info!("  GET  /health - Health check");
        info!("  GET  /api/recommendations - Get study recommendations");
        info!("  POST /api/analytics - Analyze study data");
        info!("  POST /api/schedule/optimize - Optimize study schedule");
        info!("  POST /api/prediction/performance - Predict performance");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .context("Server error")?;

        info!("Server stopped");
        Ok(())
    }
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received shutdown signal"),
            Err(e) => {
                error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix;
        match unix::signal(unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received TERM signal");
            }
            Err(e) => {
                error!("Failed to install TERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
