//! Server error types
//!
//! Every business error maps to the exact status code and JSON body the API
//! promises; anything unexpected collapses into a generic 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use promo_core::StructuralError;
use promo_runtime::{EvalError, WeatherError};
use serde_json::json;
use std::fmt;
use tracing::error;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Request body failed schema or structural validation (create endpoint)
    InvalidBody(Vec<serde_json::Value>),

    /// Malformed validation request
    MissingName,

    /// Unknown promocode name
    PromocodeNotFound,

    /// Weather collaborator failed
    WeatherUnavailable(WeatherError),

    /// Anything else
    Internal(String),
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::InvalidBody(details) => {
                write!(f, "Invalid request body ({} issue(s))", details.len())
            }
            ServerError::MissingName => write!(f, "'name' is required"),
            ServerError::PromocodeNotFound => write!(f, "Promocode not found"),
            ServerError::WeatherUnavailable(err) => {
                write!(f, "Failed to fetch weather data: {}", err)
            }
            ServerError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ServerError::InvalidBody(details) => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "Invalid request body", "details": details }),
            ),
            ServerError::MissingName => (
                StatusCode::BAD_REQUEST,
                json!({ "message": "'name' is required" }),
            ),
            ServerError::PromocodeNotFound => (
                StatusCode::NOT_FOUND,
                json!({ "message": "Promocode not found" }),
            ),
            ServerError::WeatherUnavailable(err) => {
                error!("weather lookup failed: {}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Failed to fetch weather data" }),
                )
            }
            ServerError::Internal(msg) => {
                error!("internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "message": "Internal Server Error" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<StructuralError> for ServerError {
    fn from(err: StructuralError) -> Self {
        ServerError::InvalidBody(vec![json!({
            "path": err.path,
            "message": err.kind.to_string(),
        })])
    }
}

impl From<WeatherError> for ServerError {
    fn from(err: WeatherError) -> Self {
        ServerError::WeatherUnavailable(err)
    }
}

impl From<EvalError> for ServerError {
    fn from(err: EvalError) -> Self {
        ServerError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use promo_core::StructuralErrorKind;

    #[test]
    fn test_missing_name_display() {
        assert_eq!(ServerError::MissingName.to_string(), "'name' is required");
    }

    #[test]
    fn test_not_found_display() {
        assert_eq!(
            ServerError::PromocodeNotFound.to_string(),
            "Promocode not found"
        );
    }

    #[test]
    fn test_into_response_invalid_body() {
        let err = ServerError::InvalidBody(vec![json!({"message": "bad"})]);
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_missing_name() {
        let response = ServerError::MissingName.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_response_not_found() {
        let response = ServerError::PromocodeNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_into_response_weather_failure() {
        let response = ServerError::WeatherUnavailable(WeatherError::FetchWeather).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_into_response_internal() {
        let response = ServerError::Internal("boom".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_structural_error_conversion_carries_the_path() {
        let structural = StructuralError {
            path: "restrictions[0].or".to_string(),
            kind: StructuralErrorKind::TooFewChildren("or"),
        };

        let ServerError::InvalidBody(details) = structural.into() else {
            panic!("expected InvalidBody");
        };
        assert_eq!(details[0]["path"], "restrictions[0].or");
    }

    #[test]
    fn test_eval_error_maps_to_internal() {
        let err: ServerError = EvalError::MissingContext("age").into();
        assert!(matches!(err, ServerError::Internal(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ServerError>();
    }
}
