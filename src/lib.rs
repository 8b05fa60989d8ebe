pub mod api;
pub mod config;
pub mod db;
pub mod models;
pub mod triage;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use api::ServerError;

/// Run the triage service until Ctrl-C.
pub async fn run() -> Result<(), ServerError> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let server_config = config::ServerConfig::from_env()?;
    tracing::info!(db = %server_config.db_path.display(), "Opening vitals store");
    let store = Arc::new(db::VitalsStore::open(&server_config.db_path)?);

    let mut server = api::start_server(&server_config, store).await?;

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
    server.shutdown();
    server.stopped().await;

    Ok(())
}
