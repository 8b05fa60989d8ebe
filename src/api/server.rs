//! Triage API server lifecycle — starts/stops the axum HTTP server.
//!
//! bind → spawn background task → return handle with shutdown channel.

use std::net::SocketAddr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::api::router::triage_router;
use crate::api::types::ApiContext;
use crate::config::{ConfigError, ServerConfig};
use crate::db::{DatabaseError, VitalsStore};

/// Errors raised while bringing the server up.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

/// Session metadata for a running server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSession {
    pub session_id: String,
    pub server_addr: String,
    pub port: u16,
    pub started_at: String,
}

/// Handle to a running triage API server.
pub struct TriageServer {
    pub session: ServerSession,
    shutdown_tx: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl TriageServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("Triage API server shutdown signal sent");
        }
    }

    /// Wait for the background task to finish draining connections.
    pub async fn stopped(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(e) = task.await {
                tracing::error!("Triage API server task failed: {e}");
            }
        }
    }
}

/// Start the server described by `config`, backed by `store`.
pub async fn start_server(
    config: &ServerConfig,
    store: Arc<VitalsStore>,
) -> Result<TriageServer, ServerError> {
    let ctx = ApiContext::new(store).with_max_message_len(config.max_message_len);
    start_server_on(config.bind_addr, ctx).await
}

/// Start the server on an explicit address. Port 0 picks an ephemeral port.
pub async fn start_server_on(
    bind_addr: SocketAddr,
    ctx: ApiContext,
) -> Result<TriageServer, ServerError> {
    let app = triage_router(ctx);

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr,
            source,
        })?;
    let addr = listener.local_addr().map_err(|source| ServerError::Bind {
        addr: bind_addr,
        source,
    })?;

    let session = ServerSession {
        session_id: Uuid::new_v4().to_string(),
        server_addr: addr.to_string(),
        port: addr.port(),
        started_at: chrono::Utc::now().to_rfc3339(),
    };

    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(async move {
        let shutdown_signal = async move {
            let _ = shutdown_rx.await;
            tracing::info!("Triage API server received shutdown signal");
        };

        tracing::info!(%addr, "Triage API server started");

        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal)
            .await
        {
            tracing::error!("Triage API server error: {e}");
        }

        tracing::info!("Triage API server stopped");
    });

    Ok(TriageServer {
        session,
        shutdown_tx: Some(shutdown_tx),
        task: Some(task),
    })
}

#[cfg(test)]
mod tests {
    use std::net::{IpAddr, Ipv4Addr};

    use super::*;

    fn localhost_any_port() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 0)
    }

    fn test_ctx() -> ApiContext {
        ApiContext::new(Arc::new(VitalsStore::open_in_memory().unwrap()))
    }

    #[tokio::test]
    async fn start_and_stop_server() {
        let mut server = start_server_on(localhost_any_port(), test_ctx())
            .await
            .expect("server should start");

        assert!(!server.session.session_id.is_empty());
        assert!(server.session.port > 0);

        let url = format!("http://127.0.0.1:{}/api/health", server.session.port);
        let resp = reqwest::get(&url).await.unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);

        server.shutdown();
        server.stopped().await;

        assert!(reqwest::get(&url).await.is_err());
    }

    #[tokio::test]
    async fn server_session_has_valid_metadata() {
        let mut server = start_server_on(localhost_any_port(), test_ctx())
            .await
            .expect("server should start");

        assert!(!server.session.started_at.is_empty());
        assert!(server.session.server_addr.contains(':'));
        assert!(server.session.server_addr.ends_with(&server.session.port.to_string()));

        server.shutdown();
    }

    #[tokio::test]
    async fn server_serves_chat_over_http() {
        let mut server = start_server_on(localhost_any_port(), test_ctx())
            .await
            .expect("server should start");
        let port = server.session.port;

        let client = reqwest::Client::new();
        let resp = client
            .post(format!("http://127.0.0.1:{port}/api/chat/analyze"))
            .json(&serde_json::json!({ "message": "stomach hurts" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::OK);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert!(body["response"]
            .as_str()
            .unwrap()
            .starts_with("Stomach pain could be indigestion"));

        let resp = reqwest::get(format!("http://127.0.0.1:{port}/nonexistent"))
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);

        server.shutdown();
    }

    #[tokio::test]
    async fn start_server_uses_config_limits() {
        let config = ServerConfig {
            bind_addr: localhost_any_port(),
            db_path: std::path::PathBuf::from(":memory:"),
            max_message_len: 5,
        };
        let store = Arc::new(VitalsStore::open_in_memory().unwrap());
        let mut server = start_server(&config, store).await.expect("server should start");

        let resp = reqwest::Client::new()
            .post(format!(
                "http://127.0.0.1:{}/api/chat/analyze",
                server.session.port
            ))
            .json(&serde_json::json!({ "message": "far too long" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);

        server.shutdown();
    }

    #[tokio::test]
    async fn bind_conflict_is_reported() {
        let mut first = start_server_on(localhost_any_port(), test_ctx())
            .await
            .expect("server should start");
        let taken = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), first.session.port);

        let err = start_server_on(taken, test_ctx()).await.err().unwrap();
        assert!(matches!(err, ServerError::Bind { .. }));

        first.shutdown();
    }
}
