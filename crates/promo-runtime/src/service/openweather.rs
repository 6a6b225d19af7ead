//! OpenWeather HTTP client
//!
//! Two calls per lookup: the geocoding API resolves the city name to
//! coordinates, then the current-weather API reports conditions in metric
//! units. Non-200 answers and unparsable bodies map to distinct errors; no
//! retries are attempted.

use crate::error::WeatherError;
use crate::service::{Weather, WeatherService};
use async_trait::async_trait;
use promo_core::WeatherKind;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "http://api.openweathermap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the OpenWeather geocoding + current-weather APIs
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct GeocodingEntry {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    weather: Vec<WeatherEntry>,
    main: WeatherMain,
}

#[derive(Debug, Deserialize)]
struct WeatherEntry {
    main: WeatherKind,
}

#[derive(Debug, Deserialize)]
struct WeatherMain {
    temp: f64,
}

impl OpenWeatherClient {
    /// Create a client against the public OpenWeather API
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Create with a custom base URL (e.g. a stub server in tests)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            client: Client::new(),
        }
    }

    async fn coordinates(&self, city: &str) -> Result<(f64, f64), WeatherError> {
        let response = self
            .client
            .get(format!("{}/geo/1.0/direct", self.base_url))
            .query(&[("q", city), ("appid", &self.api_key)])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(WeatherError::FetchCoordinates);
        }

        let entries: Vec<GeocodingEntry> = response
            .json()
            .await
            .map_err(|_| WeatherError::ParseCoordinates)?;
        let entry = entries.first().ok_or(WeatherError::ParseCoordinates)?;

        Ok((entry.lat, entry.lon))
    }

    async fn weather_at(&self, lat: f64, lon: f64) -> Result<Weather, WeatherError> {
        let response = self
            .client
            .get(format!("{}/data/2.5/weather", self.base_url))
            .query(&[
                ("lat", lat.to_string()),
                ("lon", lon.to_string()),
                ("units", "metric".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(WeatherError::FetchWeather);
        }

        let body: WeatherResponse = response
            .json()
            .await
            .map_err(|_| WeatherError::ParseWeather)?;
        let entry = body.weather.first().ok_or(WeatherError::ParseWeather)?;

        Ok(Weather {
            main: entry.main,
            temp: body.main.temp,
        })
    }
}

#[async_trait]
impl WeatherService for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<Weather, WeatherError> {
        let (lat, lon) = self.coordinates(city).await?;
        debug!(%city, lat, lon, "resolved coordinates");

        self.weather_at(lat, lon).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_geocoding_response_parses() {
        let entries: Vec<GeocodingEntry> =
            serde_json::from_value(json!([{"lat": 45.76, "lon": 4.83, "name": "Lyon"}])).unwrap();

        assert_eq!(entries[0].lat, 45.76);
        assert_eq!(entries[0].lon, 4.83);
    }

    #[test]
    fn test_weather_response_parses() {
        let body: WeatherResponse = serde_json::from_value(json!({
            "weather": [{"id": 800, "main": "Clear", "description": "clear sky"}],
            "main": {"temp": 21.4, "humidity": 40}
        }))
        .unwrap();

        assert_eq!(body.weather[0].main, WeatherKind::Clear);
        assert_eq!(body.main.temp, 21.4);
    }

    #[test]
    fn test_unknown_weather_group_fails_to_parse() {
        let result: Result<WeatherResponse, _> = serde_json::from_value(json!({
            "weather": [{"main": "Tornado"}],
            "main": {"temp": 21.4}
        }));

        assert!(result.is_err());
    }
}
