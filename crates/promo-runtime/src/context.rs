//! Per-request evaluation context

use crate::error::WeatherError;
use crate::service::WeatherService;
use chrono::{DateTime, Utc};
use promo_core::WeatherKind;
use tracing::debug;

/// Weather facts resolved for the requester's town
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherContext {
    pub city: String,
    pub main: WeatherKind,
    pub temp: f64,
}

/// Runtime facts a validation request supplies.
///
/// Built once per request and immutable during the walk; `date` is always
/// set, `age` and `weather` only when the request provided the matching
/// argument.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationContext {
    pub age: Option<f64>,
    pub date: DateTime<Utc>,
    pub weather: Option<WeatherContext>,
}

impl EvaluationContext {
    /// Context for the current instant with no optional facts
    pub fn now() -> Self {
        Self {
            age: None,
            date: Utc::now(),
            weather: None,
        }
    }

    pub fn with_age(mut self, age: f64) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = date;
        self
    }

    pub fn with_weather(mut self, weather: WeatherContext) -> Self {
        self.weather = Some(weather);
        self
    }

    /// Assemble the context for a validation request.
    ///
    /// The weather service is called at most once, here, no matter how many
    /// weather leaves the restriction tree contains.
    pub async fn gather(
        age: Option<f64>,
        town: Option<&str>,
        service: &dyn WeatherService,
    ) -> Result<Self, WeatherError> {
        let mut context = Self::now();
        context.age = age;

        if let Some(town) = town {
            let report = service.current(town).await?;
            debug!(%town, main = %report.main, temp = report.temp, "resolved weather");
            context.weather = Some(WeatherContext {
                city: town.to_string(),
                main: report.main,
                temp: report.temp,
            });
        }

        Ok(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MockWeatherService;

    #[tokio::test]
    async fn test_gather_without_town_skips_the_lookup() {
        let service = MockWeatherService::unavailable();

        let context = EvaluationContext::gather(Some(30.0), None, &service)
            .await
            .unwrap();

        assert_eq!(context.age, Some(30.0));
        assert!(context.weather.is_none());
    }

    #[tokio::test]
    async fn test_gather_wraps_the_town_as_city() {
        let service = MockWeatherService::reporting(WeatherKind::Clear, 21.5);

        let context = EvaluationContext::gather(None, Some("Lyon"), &service)
            .await
            .unwrap();

        let weather = context.weather.unwrap();
        assert_eq!(weather.city, "Lyon");
        assert_eq!(weather.main, WeatherKind::Clear);
        assert_eq!(weather.temp, 21.5);
        assert!(context.age.is_none());
    }

    #[tokio::test]
    async fn test_gather_surfaces_service_failures() {
        let service = MockWeatherService::unavailable();

        let result = EvaluationContext::gather(None, Some("Lyon"), &service).await;
        assert!(result.is_err());
    }
}
