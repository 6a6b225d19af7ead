//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::store::PromocodeStore;
use promo_core::Advantage;
use promo_runtime::{Reason, WeatherService};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Application state shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PromocodeStore>,
    pub weather: Arc<dyn WeatherService>,
}

/// `POST /promocodes` request body.
///
/// `restrictions` stays untyped here; the structural validator turns it
/// into `Condition`s or a 400 naming the offending path.
#[derive(Debug, Deserialize)]
pub struct CreatePromocodePayload {
    pub name: String,
    pub advantage: Advantage,
    pub restrictions: Vec<serde_json::Value>,
}

/// `POST /promocodes/validate` request body
#[derive(Debug, Deserialize)]
pub struct ValidatePromocodePayload {
    pub promocode_name: String,
    pub arguments: ValidateArguments,
}

/// Arguments a client supplies for evaluation
#[derive(Debug, Default, Deserialize)]
pub struct ValidateArguments {
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub town: Option<String>,
}

/// Validation verdict reported to clients
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValidationStatus {
    Accepted,
    Rejected,
}

/// `POST /promocodes/validate` response body
#[derive(Debug, Serialize)]
pub struct ValidatePromocodeResponse {
    pub promocode_name: String,
    pub status: ValidationStatus,

    /// Present iff the promocode was accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advantage: Option<Advantage>,

    /// Per-restriction results, present iff rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub message: String,
}
