//! Weather lookup boundary
//!
//! The evaluator never performs I/O; weather facts are fetched once per
//! request through this service before evaluation starts.

mod openweather;

pub use openweather::OpenWeatherClient;

use crate::error::WeatherError;
use async_trait::async_trait;
use promo_core::WeatherKind;

/// Current weather for a location, reduced to the facts the rule engine
/// compares against
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weather {
    pub main: WeatherKind,
    pub temp: f64,
}

/// Source of current weather data
#[async_trait]
pub trait WeatherService: Send + Sync {
    /// Look up the current weather for a city by name
    async fn current(&self, city: &str) -> Result<Weather, WeatherError>;
}

/// Fixed-response weather service for tests
pub struct MockWeatherService {
    weather: Option<Weather>,
}

impl MockWeatherService {
    /// Always reports the given weather
    pub fn reporting(main: WeatherKind, temp: f64) -> Self {
        Self {
            weather: Some(Weather { main, temp }),
        }
    }

    /// Always fails, like an unreachable upstream
    pub fn unavailable() -> Self {
        Self { weather: None }
    }
}

#[async_trait]
impl WeatherService for MockWeatherService {
    async fn current(&self, _city: &str) -> Result<Weather, WeatherError> {
        self.weather.ok_or(WeatherError::FetchWeather)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_reports_fixed_weather() {
        let service = MockWeatherService::reporting(WeatherKind::Snow, -3.0);

        let report = service.current("Oslo").await.unwrap();
        assert_eq!(report.main, WeatherKind::Snow);
        assert_eq!(report.temp, -3.0);
    }

    #[tokio::test]
    async fn test_mock_can_simulate_an_outage() {
        let service = MockWeatherService::unavailable();
        assert!(service.current("Oslo").await.is_err());
    }
}
