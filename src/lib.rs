pub mod api;
pub mod config;
pub mod models;
pub mod pipeline;

use std::sync::Arc;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, ServerConfig};
use crate::pipeline::{ReportAnalyzer, ThresholdClassifier};

#[derive(Error, Debug)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Server(#[from] api::ServerError),

    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(std::io::Error),
}

/// Start the API server and block until Ctrl-C.
pub async fn run() -> Result<(), RunError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = ServerConfig::from_env()?;
    let analyzer = Arc::new(ReportAnalyzer::new(Arc::new(ThresholdClassifier)));

    let mut server = api::start_api_server(&server_config, analyzer).await?;
    tracing::info!(
        addr = %server.local_addr,
        cors_origins = server_config.cors_origins.len(),
        "Listening"
    );

    tokio::signal::ctrl_c().await.map_err(RunError::Signal)?;
    server.shutdown();
    server.wait().await?;

    Ok(())
}
