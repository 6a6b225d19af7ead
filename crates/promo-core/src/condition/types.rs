//! Condition types for promocode restrictions

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One node of the recursive restriction tree.
///
/// Serializes to the single-key wire format: `{"age": {...}}`,
/// `{"or": [...]}`, and so on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Condition {
    /// Numeric comparison against the requester's age
    Age(NumberComparison),
    /// Date range check against the validation instant
    Date(DateRange),
    /// Weather check against the requester's town
    Weather(WeatherComparison),
    /// At least one child must succeed
    Or(Vec<Condition>),
    /// Every child must succeed
    And(Vec<Condition>),
}

/// Bounds on a numeric value. `gt` and `lt` are strict.
///
/// An empty comparison matches anything, so the structural validator
/// requires at least one bound to be set.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct NumberComparison {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eq: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gt: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lt: Option<f64>,
}

impl NumberComparison {
    /// True when no bound is set
    pub fn is_empty(&self) -> bool {
        self.eq.is_none() && self.gt.is_none() && self.lt.is_none()
    }
}

/// Inclusive date bounds. Accepts RFC 3339 instants or bare `YYYY-MM-DD`
/// calendar dates (read as midnight UTC) on the wire.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct DateRange {
    #[serde(default, with = "iso_date", skip_serializing_if = "Option::is_none")]
    pub after: Option<DateTime<Utc>>,
    #[serde(default, with = "iso_date", skip_serializing_if = "Option::is_none")]
    pub before: Option<DateTime<Utc>>,
}

impl DateRange {
    /// True when no bound is set
    pub fn is_empty(&self) -> bool {
        self.after.is_none() && self.before.is_none()
    }
}

/// Expected weather group, with an optional temperature comparison on top
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherComparison {
    pub is: WeatherKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp: Option<NumberComparison>,
}

/// Closed set of weather groups reported by the OpenWeather API
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WeatherKind {
    Atmosphere,
    Clear,
    Clouds,
    Drizzle,
    Mist,
    Rain,
    Snow,
    Thunderstorm,
}

impl fmt::Display for WeatherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WeatherKind::Atmosphere => "Atmosphere",
            WeatherKind::Clear => "Clear",
            WeatherKind::Clouds => "Clouds",
            WeatherKind::Drizzle => "Drizzle",
            WeatherKind::Mist => "Mist",
            WeatherKind::Rain => "Rain",
            WeatherKind::Snow => "Snow",
            WeatherKind::Thunderstorm => "Thunderstorm",
        };
        f.write_str(name)
    }
}

/// Date (de)serialization that accepts RFC 3339 or bare calendar dates
mod iso_date {
    use super::*;
    use serde::{de, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(instant) => serializer.serialize_str(&instant.to_rfc3339()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(raw) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };

        if let Ok(instant) = DateTime::parse_from_rfc3339(&raw) {
            return Ok(Some(instant.with_timezone(&Utc)));
        }

        NaiveDate::parse_from_str(&raw, "%Y-%m-%d")
            .map(|date| Some(date.and_time(NaiveTime::MIN).and_utc()))
            .map_err(|_| {
                de::Error::custom(format!(
                    "invalid date `{raw}`: expected RFC 3339 or YYYY-MM-DD"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_age_condition_wire_format() {
        let condition: Condition = serde_json::from_value(json!({"age": {"gt": 18}})).unwrap();
        assert_eq!(
            condition,
            Condition::Age(NumberComparison {
                gt: Some(18.0),
                ..Default::default()
            })
        );

        let round_trip = serde_json::to_value(&condition).unwrap();
        assert_eq!(round_trip, json!({"age": {"gt": 18.0}}));
    }

    #[test]
    fn test_or_condition_wire_format() {
        let condition: Condition = serde_json::from_value(json!({
            "or": [{"age": {"eq": 40}}, {"age": {"lt": 30}}]
        }))
        .unwrap();

        match &condition {
            Condition::Or(children) => assert_eq!(children.len(), 2),
            other => panic!("expected Or, got {other:?}"),
        }
    }

    #[test]
    fn test_nested_and_inside_or() {
        let condition: Condition = serde_json::from_value(json!({
            "or": [
                {"and": [{"age": {"gt": 18}}, {"age": {"lt": 65}}]},
                {"weather": {"is": "Clear"}}
            ]
        }))
        .unwrap();

        let Condition::Or(children) = &condition else {
            panic!("expected Or");
        };
        assert!(matches!(children[0], Condition::And(_)));
        assert!(matches!(children[1], Condition::Weather(_)));
    }

    #[test]
    fn test_weather_condition_wire_format() {
        let condition: Condition = serde_json::from_value(json!({
            "weather": {"is": "Snow", "temp": {"lt": 0}}
        }))
        .unwrap();

        let Condition::Weather(comparison) = &condition else {
            panic!("expected Weather");
        };
        assert_eq!(comparison.is, WeatherKind::Snow);
        assert_eq!(comparison.temp.unwrap().lt, Some(0.0));
    }

    #[test]
    fn test_weather_temp_is_optional_and_omitted() {
        let condition = Condition::Weather(WeatherComparison {
            is: WeatherKind::Clear,
            temp: None,
        });
        assert_eq!(
            serde_json::to_value(&condition).unwrap(),
            json!({"weather": {"is": "Clear"}})
        );
    }

    #[test]
    fn test_weather_kind_strings() {
        for (kind, name) in [
            (WeatherKind::Atmosphere, "Atmosphere"),
            (WeatherKind::Clear, "Clear"),
            (WeatherKind::Clouds, "Clouds"),
            (WeatherKind::Drizzle, "Drizzle"),
            (WeatherKind::Mist, "Mist"),
            (WeatherKind::Rain, "Rain"),
            (WeatherKind::Snow, "Snow"),
            (WeatherKind::Thunderstorm, "Thunderstorm"),
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), json!(name));
            assert_eq!(kind.to_string(), name);
        }
    }

    #[test]
    fn test_unknown_weather_kind_rejected() {
        let result: Result<WeatherKind, _> = serde_json::from_value(json!("Tornado"));
        assert!(result.is_err());
    }

    #[test]
    fn test_date_range_accepts_calendar_dates() {
        let range: DateRange =
            serde_json::from_value(json!({"after": "2024-01-01", "before": "2024-12-31"})).unwrap();

        assert_eq!(
            range.after.unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(
            range.before.unwrap(),
            Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_date_range_accepts_rfc3339() {
        let range: DateRange =
            serde_json::from_value(json!({"after": "2024-06-15T12:30:00Z"})).unwrap();

        assert_eq!(
            range.after.unwrap(),
            Utc.with_ymd_and_hms(2024, 6, 15, 12, 30, 0).unwrap()
        );
        assert!(range.before.is_none());
    }

    #[test]
    fn test_date_range_rejects_garbage() {
        let result: Result<DateRange, _> = serde_json::from_value(json!({"after": "tomorrow"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_number_comparison_is_empty() {
        assert!(NumberComparison::default().is_empty());
        assert!(!NumberComparison {
            eq: Some(1.0),
            ..Default::default()
        }
        .is_empty());
    }
}
