pub mod get_data;

use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use crate::services::location_fetcher::LocationFetcher;

pub use get_data::get_data;

const INDEX_HTML: &str = include_str!("../../templates/index.html");

pub fn router(fetcher: Arc<LocationFetcher>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_data", post(get_data))
        .route("/health", get(health))
        .with_state(fetcher)
}

/// Serve the globe page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "air-quality-service",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
