//! Air quality service
//!
//! Looks up current carbon monoxide, nitrogen dioxide, ozone and temperature
//! readings from Open-Meteo for a batch of coordinates and serves them, together
//! with the globe page that requests them, over HTTP.

pub mod config;
pub mod handlers;
pub mod libraries;
pub mod models;
pub mod services;

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use config::Config;
use services::location_fetcher::LocationFetcher;

/// Build the full application router from configuration
pub fn build_app(config: &Config) -> Result<Router> {
    let fetcher = Arc::new(LocationFetcher::new(config)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(handlers::router(fetcher)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}
