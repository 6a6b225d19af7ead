//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::types::*;
use crate::error::ServerError;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use promo_core::{condition, Promocode};
use promo_runtime::{evaluate_restrictions, EvaluationContext};
use serde_json::json;
use tracing::info;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "OK".to_string(),
    })
}

/// Fallback for unmatched routes
pub(super) async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}

/// Create promocode endpoint
#[axum::debug_handler]
pub(super) async fn create_promocode(
    State(state): State<AppState>,
    payload: Result<Json<CreatePromocodePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<Promocode>), ServerError> {
    let Json(payload) = payload.map_err(|rejection| {
        ServerError::InvalidBody(vec![json!({ "message": rejection.body_text() })])
    })?;

    let restrictions = condition::parse_restrictions(&payload.restrictions)?;

    let promocode = Promocode {
        name: payload.name,
        advantage: payload.advantage,
        restrictions,
    };

    info!(
        name = %promocode.name,
        restrictions = promocode.restrictions.len(),
        "storing promocode"
    );
    state.store.create(promocode.clone()).await;

    Ok((StatusCode::CREATED, Json(promocode)))
}

/// Validate promocode endpoint
#[axum::debug_handler]
pub(super) async fn validate_promocode(
    State(state): State<AppState>,
    payload: Result<Json<ValidatePromocodePayload>, JsonRejection>,
) -> Result<Json<ValidatePromocodeResponse>, ServerError> {
    let Json(payload) = payload.map_err(|_| ServerError::MissingName)?;
    let arguments = payload.arguments;

    // Weather resolves before the store lookup, so an upstream outage is
    // reported even for unknown promocode names.
    let context = EvaluationContext::gather(
        arguments.age,
        arguments.town.as_deref(),
        state.weather.as_ref(),
    )
    .await?;

    let promocode = state
        .store
        .get(&payload.promocode_name)
        .await
        .ok_or(ServerError::PromocodeNotFound)?;

    let result = evaluate_restrictions(&promocode.restrictions, &context)?;

    info!(
        name = %promocode.name,
        success = result.success,
        "evaluated promocode"
    );

    Ok(Json(ValidatePromocodeResponse {
        promocode_name: promocode.name,
        status: if result.success {
            ValidationStatus::Accepted
        } else {
            ValidationStatus::Rejected
        },
        advantage: result.success.then_some(promocode.advantage),
        reasons: if result.success { None } else { result.reasons },
    }))
}
