//! HTTP server: routing, shared state and lifecycle.

use std::path::PathBuf;
use std::sync::Arc;

use axum::routing::{delete, get};
use axum::Router;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use itemlistapp::api::ItemsApi;
use itemlistapp::config::ServerConfig;
use itemlistapp::error::{ItemsError, Result};
use itemlistapp::store::fs::FileStore;

use crate::handlers;

/// Shared application state.
pub struct AppState {
    /// Single writer over the backing file.
    pub api: Mutex<ItemsApi<FileStore>>,
    /// Front-end document served at `/`.
    pub index_file: PathBuf,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            api: Mutex::new(ItemsApi::new(FileStore::new(&config.data_file))),
            index_file: config.index_file(),
        }
    }
}

/// The HTTP server.
pub struct Server {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl Server {
    /// Creates the server, making sure the static directory exists.
    pub fn new(config: ServerConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.static_dir).map_err(ItemsError::Io)?;
        let state = Arc::new(AppState::new(&config));
        Ok(Self { config, state })
    }

    /// Creates the router.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(handlers::index))
            .route(
                "/items",
                get(handlers::list_items).post(handlers::create_item),
            )
            .route("/items/:id", delete(handlers::delete_item))
            .nest_service("/static", ServeDir::new(&self.config.static_dir))
            .with_state(self.state.clone())
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
    }

    /// Runs the server until Ctrl+C or SIGTERM.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.socket_addr()?;
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!(
            addr = %addr,
            data_file = %self.config.data_file.display(),
            static_dir = %self.config.static_dir.display(),
            "Starting itemlist server"
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        () = terminate => tracing::info!("Received SIGTERM, shutting down"),
    }
}
