//! HTTP surface for keyword expansion.
//!
//! One route does the work: `GET /api/scraper/scrape?engine=...&query=...`.
//! The router is built separately from the listener so integration tests can
//! drive it in-process.

use std::time::Duration;

use axum::{routing::get, Router};
use kwscout_core::config::AppConfig;
use sources::SourceRegistry;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

use routes::{healthz, scrape_handler};
use state::AppState;

/// Build the application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(60 * 60));

    Router::new()
        .route("/api/scraper/scrape", get(scrape_handler))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Bind and serve until Ctrl+C or SIGTERM.
pub async fn start_server(config: AppConfig, registry: SourceRegistry) -> anyhow::Result<()> {
    let address = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(registry);

    let listener = TcpListener::bind(&address).await?;
    info!("server listening on {address}");

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
        info!("received terminate signal, shutting down");
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
