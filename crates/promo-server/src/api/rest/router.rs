//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::{create_promocode, health, not_found, validate_promocode};
use super::types::AppState;
use crate::store::PromocodeStore;
use axum::{
    routing::{get, post},
    Router,
};
use promo_runtime::WeatherService;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the REST API router
pub fn create_router(store: Arc<PromocodeStore>, weather: Arc<dyn WeatherService>) -> Router {
    let state = AppState { store, weather };

    Router::new()
        .route("/_healthz", get(health))
        .route("/promocodes", post(create_promocode))
        .route("/promocodes/validate", post(validate_promocode))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
