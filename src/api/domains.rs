//! Domain registry endpoints
//!
//! The dashboard's domain list: an ordered collection of domain records keyed
//! by id. The crawler core never touches these routes.

use crate::api::{error_response, AppState};
use crate::storage::{NewDomain, StorageError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// `GET /api/domains` - the full registry in registration order
pub async fn list_domains(State(state): State<AppState>) -> Response {
    let registry = state.registry.lock().unwrap();
    match registry.list() {
        Ok(records) => Json(records).into_response(),
        Err(e) => {
            tracing::error!("Failed to list domains: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `POST /api/domains` - register a new domain
pub async fn create_domain(
    State(state): State<AppState>,
    Json(new): Json<NewDomain>,
) -> Response {
    if new.domain.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing domain");
    }

    let mut registry = state.registry.lock().unwrap();
    match registry.insert(new) {
        Ok(record) => (StatusCode::CREATED, Json(record)).into_response(),
        Err(e) => {
            tracing::error!("Failed to register domain: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// `DELETE /api/domains/{id}` - remove a domain
pub async fn delete_domain(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    let mut registry = state.registry.lock().unwrap();
    match registry.delete(id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(StorageError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, format!("No domain with id {}", id))
        }
        Err(e) => {
            tracing::error!("Failed to delete domain {}: {}", id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
