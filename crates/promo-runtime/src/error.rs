//! Runtime error types

use thiserror::Error;

/// Fault raised when a validated tree demands context the request did not
/// supply. This is never a rejection: the stored tree asks for data the
/// request cannot provide, so the walk aborts instead of producing a result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("condition requires `{0}` in the evaluation context")]
    MissingContext(&'static str),
}

/// Weather collaborator failures, kept separate from generic faults so the
/// API boundary can answer with its dedicated message
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Failed to fetch latitude and longitude")]
    FetchCoordinates,

    #[error("Failed to parse lat and lon")]
    ParseCoordinates,

    #[error("Failed to fetch weather for location")]
    FetchWeather,

    #[error("Failed to parse weather data")]
    ParseWeather,

    #[error("Weather request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
