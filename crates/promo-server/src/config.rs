//! Server configuration

use serde::{Deserialize, Serialize};

/// Weather collaborator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// Base URL of the OpenWeather API
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// API key; town-based validations fail without one
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            api_key: None,
        }
    }
}

fn default_weather_base_url() -> String {
    "http://api.openweathermap.org".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Weather API configuration
    #[serde(default)]
    pub weather: WeatherConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            weather: WeatherConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file.
    ///
    /// Environment variables use the `PROMO` prefix with `__` for nesting:
    /// `PROMO_PORT=8080`, `PROMO_WEATHER__API_KEY=...`.
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();

        let config_result = config::Config::builder()
            .add_source(config::File::with_name("config/server").required(false))
            .add_source(config::Environment::with_prefix("PROMO").separator("__"))
            .build();

        match config_result {
            Ok(cfg) => cfg
                .try_deserialize()
                .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e)),
            Err(_) => {
                tracing::info!("No config file found, using default configuration");
                Ok(Self::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 3000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.weather.base_url, "http://api.openweathermap.org");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_config_deserializes_with_partial_input() {
        let config: ServerConfig = serde_json::from_str(r#"{"port": 8080}"#).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "127.0.0.1");
        assert!(config.weather.api_key.is_none());
    }

    #[test]
    fn test_weather_config_deserializes_api_key() {
        let config: ServerConfig = serde_json::from_str(
            r#"{"weather": {"api_key": "secret", "base_url": "http://localhost:9100"}}"#,
        )
        .unwrap();

        assert_eq!(config.weather.api_key.as_deref(), Some("secret"));
        assert_eq!(config.weather.base_url, "http://localhost:9100");
    }

    #[test]
    fn test_server_config_clone() {
        let config = ServerConfig::default();
        let cloned = config.clone();

        assert_eq!(config.host, cloned.host);
        assert_eq!(config.port, cloned.port);
    }
}
