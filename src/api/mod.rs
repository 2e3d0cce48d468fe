//! HTTP API surface
//!
//! Routes consumed by the dashboard:
//! - `GET /api/crawl` - run a bounded crawl and return the page list
//! - `GET /api/health` - liveness probe
//! - `GET|POST /api/domains`, `DELETE /api/domains/{id}` - domain registry
//!
//! Request-level failures (wrong method, missing parameter) surface as 4xx
//! with a structured `{error}` body before any crawl starts; anything escaping
//! a handler is converted to a 500 with a best-effort message.

mod crawl;
mod domains;

pub use crawl::crawl_handler;
pub use domains::{create_domain, delete_domain, list_domains};

use crate::config::Config;
use crate::crawler::{build_http_client, REQUEST_TIMEOUT};
use crate::storage::SqliteRegistry;
use crate::CrawlError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{any, delete, get};
use axum::{Json, Router};
use reqwest::Client;
use serde::Serialize;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Shared state for all API handlers
#[derive(Clone)]
pub struct AppState {
    pub client: Client,
    pub registry: Arc<Mutex<SqliteRegistry>>,
}

/// Structured error body returned by every failing route
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Builds a `{error}` JSON response with the given status
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Builds the API router over the given state
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/crawl", any(crawl_handler))
        .route("/api/health", get(health_handler))
        .route("/api/domains", get(list_domains).post(create_domain))
        .route("/api/domains/{id}", delete(delete_domain))
        .with_state(state)
}

async fn health_handler() -> Response {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "grace-crawler",
    }))
    .into_response()
}

/// Runs the API server until it is shut down
///
/// Builds the shared HTTP client from the configured user agent, opens the
/// domain registry, and serves the router on the configured bind address.
pub async fn serve(config: Config) -> Result<(), CrawlError> {
    let user_agent = config.user_agent.header_value();
    let client = build_http_client(&user_agent, REQUEST_TIMEOUT)?;
    let registry = SqliteRegistry::open(Path::new(&config.registry.database_path))?;

    let state = AppState {
        client,
        registry: Arc::new(Mutex::new(registry)),
    };

    let addr: SocketAddr = config
        .server
        .bind_address
        .parse()
        .map_err(|e| crate::ConfigError::Validation(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("grace-crawler API listening on {} as {}", addr, user_agent);

    axum::serve(listener, build_router(state)).await?;
    Ok(())
}
