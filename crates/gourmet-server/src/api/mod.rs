mod search;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, REQUEST_ID_HEADER};
use crate::search::{SearchError, SearchService};

#[derive(Clone)]
pub struct AppState {
    pub search: Arc<SearchService>,
}

/// Error body returned by every endpoint: `{"code": ..., "message": ...}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn invalid_arguments() -> Self {
        Self::new("invalid_arguments", "invalid arguments")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.code.as_str() {
            "invalid_arguments" | "geolocation_failed" | "unsupported_location" => {
                StatusCode::BAD_REQUEST
            }
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Logs the underlying failure and returns the generic client-facing error.
pub(super) fn map_search_error(request_id: &str, error: &SearchError) -> ApiError {
    match error {
        SearchError::Geolocation(e) => {
            tracing::warn!(request_id, error = %e, "geolocation failed");
            ApiError::new("geolocation_failed", "failed to get prefecture")
        }
        SearchError::UnsupportedLocation(prefecture) => {
            tracing::debug!(request_id, prefecture = %prefecture, "unsupported prefecture");
            ApiError::new("unsupported_location", "invalid longitude/latitude")
        }
        SearchError::Directory { .. } => {
            tracing::error!(request_id, error = %error, "directory search failed");
            ApiError::new("upstream_error", "failed to search stores")
        }
        SearchError::Distance(e) => {
            tracing::error!(request_id, error = %e, "distance lookup failed");
            ApiError::new("upstream_error", "failed to get distances")
        }
    }
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/search", get(search::search))
        .route("/search-all", get(search::search_all))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn index() -> &'static str {
    "HELLO"
}

async fn health() -> impl IntoResponse {
    Json(HealthData { status: "ok" })
}
