use crate::config::Config;
use crate::routes;
use anyhow::{Context, Result};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Handle to control the running server
pub struct ServerHandle {
    shutdown_tx: oneshot::Sender<()>,
    task: JoinHandle<()>,
    local_addr: SocketAddr,
}

impl ServerHandle {
    /// Get the port the server is running on
    pub fn port(&self) -> u16 {
        self.local_addr.port()
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Signal a graceful shutdown and wait for in-flight requests to finish
    pub async fn shutdown(self) -> Result<()> {
        let _ = self.shutdown_tx.send(());
        self.task.await.context("Server task panicked")
    }
}

/// Build the application router for the given configuration
pub fn build_app(config: &Config) -> Router {
    let app = routes::create_routes();

    if config.debug {
        app.layer(TraceLayer::new_for_http())
    } else {
        app
    }
}

/// Run the HTTP server
pub async fn run_server(config: &Config) -> Result<ServerHandle> {
    let addr = config.socket_addr().await?;
    let app = build_app(config);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    let local_addr = listener.local_addr()?;

    info!("Server listening on http://{}", local_addr);
    if config.debug {
        info!("Debug mode enabled, logging every request");
    }

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let task = tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("Shutting down server...");
            })
            .await
        {
            error!("Server error: {}", e);
        }
    });

    Ok(ServerHandle {
        shutdown_tx,
        task,
        local_addr,
    })
}
