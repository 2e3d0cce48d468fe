//! The crawl endpoint
//!
//! `GET /api/crawl?url=<target>&maxPages=<int>&maxDepth=<int>`
//!
//! Only GET is accepted; `url` is required; `maxPages` and `maxDepth` fall back
//! to their defaults when absent, non-numeric, or non-positive. Successful
//! responses carry a one-hour shared cache hint so repeated dashboard loads of
//! the same site do not re-crawl it.

use crate::api::{error_response, AppState};
use crate::crawler::{crawl, CrawlLimits, DEFAULT_MAX_DEPTH, DEFAULT_MAX_PAGES};
use crate::CrawlError;
use axum::extract::{Query, State};
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;
use std::str::FromStr;

const CACHE_CONTROL_VALUE: &str = "s-maxage=3600, stale-while-revalidate";

pub async fn crawl_handler(
    method: Method,
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if method != Method::GET {
        return error_response(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed");
    }

    let target = params.get("url").map(String::as_str).unwrap_or("");
    if target.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Missing url");
    }

    let limits = CrawlLimits {
        max_pages: parse_positive(params.get("maxPages"), DEFAULT_MAX_PAGES),
        max_depth: parse_positive(params.get("maxDepth"), DEFAULT_MAX_DEPTH),
    };

    match crawl(&state.client, target, limits).await {
        Ok(result) => (
            [(header::CACHE_CONTROL, CACHE_CONTROL_VALUE)],
            Json(result),
        )
            .into_response(),
        Err(CrawlError::UrlError(e)) => error_response(StatusCode::BAD_REQUEST, e.to_string()),
        Err(e) => {
            tracing::error!("Crawl of {} failed: {}", target, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

/// Parses an optional numeric parameter, falling back on absent, unparseable,
/// or non-positive values
fn parse_positive<T>(value: Option<&String>, default: T) -> T
where
    T: FromStr + PartialOrd + Default,
{
    value
        .and_then(|v| v.parse::<T>().ok())
        .filter(|v| *v > T::default())
        .unwrap_or(default)
}
