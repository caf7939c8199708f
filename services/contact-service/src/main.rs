use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use folio_storage::{InMemoryMessageStore, MessageStore, RocksDbMessageStore};
use serde::Serialize;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tracing::info;

mod config;
mod contact;
mod error;

use config::{Config, StoreKind};

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

#[derive(Clone)]
struct AppState {
    store: Arc<dyn MessageStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Config::from_env()?;

    let store: Arc<dyn MessageStore> = match &config.store {
        StoreKind::Memory => {
            info!("using in-memory message store");
            Arc::new(InMemoryMessageStore::new())
        }
        StoreKind::RocksDb { path } => {
            info!("using RocksDB message store at {}", path);
            Arc::new(RocksDbMessageStore::open_default(path)?)
        }
    };

    let app = app(AppState { store });

    info!("contact-service listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route(
            "/api/contact",
            post(contact::submit_contact)
                .layer(CatchPanicLayer::custom(contact::panic_response))
                .layer(middleware::from_fn(contact::with_request_id)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("failed to install ctrl-c handler: {}", err);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "contact-service",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "contact-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}
