//! Structural validation of untyped condition JSON
//!
//! Restriction trees arrive as raw JSON and are only stored once every node
//! passes the structural rules:
//! - a node is an object with exactly one of the keys `age`, `date`,
//!   `weather`, `or`, `and`
//! - `age` and `date` payloads must set at least one bound
//! - a `weather` payload needs a valid `is` value, and its optional `temp`
//!   must set at least one bound
//! - `or` and `and` take at least two children, each valid in turn
//!
//! Validation fails fast: the first violation is reported with the path of
//! the offending node. Unknown keys inside leaf payloads are ignored, so
//! `{"age": {"gt": 18, "note": "adults"}}` is accepted while
//! `{"age": {"note": "adults"}}` is not.

use crate::condition::types::{Condition, DateRange, NumberComparison, WeatherComparison};
use crate::error::{Result, StructuralError, StructuralErrorKind};
use serde_json::Value;

const CONDITION_KEYS: &[&str] = &["age", "date", "weather", "or", "and"];

/// Validate a promocode's `restrictions` array.
///
/// Every element must independently validate; the array itself may be empty
/// (an empty restriction list never grants, but it is well-formed).
pub fn parse_restrictions(values: &[Value]) -> Result<Vec<Condition>> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| parse_condition(value, &format!("restrictions[{index}]")))
        .collect()
}

/// Validate a single condition node rooted at `path`
pub fn parse_condition(value: &Value, path: &str) -> Result<Condition> {
    let Some(object) = value.as_object() else {
        return Err(StructuralError::new(path, StructuralErrorKind::UnknownShape));
    };

    let mut keys = object
        .keys()
        .map(String::as_str)
        .filter(|key| CONDITION_KEYS.contains(key));

    let key = match (keys.next(), keys.next()) {
        (Some(key), None) => key,
        // none of the known keys, or more than one of them
        _ => return Err(StructuralError::new(path, StructuralErrorKind::UnknownShape)),
    };

    let payload = &object[key];
    let path = format!("{path}.{key}");

    match key {
        "age" => {
            let comparison = parse_payload::<NumberComparison>(payload, "age", &path)?;
            if comparison.is_empty() {
                return Err(StructuralError::new(path, StructuralErrorKind::EmptyComparison));
            }
            Ok(Condition::Age(comparison))
        }
        "date" => {
            let range = parse_payload::<DateRange>(payload, "date", &path)?;
            if range.is_empty() {
                return Err(StructuralError::new(path, StructuralErrorKind::EmptyDateRange));
            }
            Ok(Condition::Date(range))
        }
        "weather" => {
            let comparison = parse_payload::<WeatherComparison>(payload, "weather", &path)?;
            if let Some(temp) = &comparison.temp {
                if temp.is_empty() {
                    return Err(StructuralError::new(
                        format!("{path}.temp"),
                        StructuralErrorKind::EmptyComparison,
                    ));
                }
            }
            Ok(Condition::Weather(comparison))
        }
        "or" => Ok(Condition::Or(parse_children(payload, "or", &path)?)),
        "and" => Ok(Condition::And(parse_children(payload, "and", &path)?)),
        _ => unreachable!("key filtered against CONDITION_KEYS"),
    }
}

fn parse_payload<T: serde::de::DeserializeOwned>(
    payload: &Value,
    key: &'static str,
    path: &str,
) -> Result<T> {
    serde_json::from_value(payload.clone()).map_err(|err| {
        StructuralError::new(
            path,
            StructuralErrorKind::Payload {
                key,
                message: err.to_string(),
            },
        )
    })
}

fn parse_children(payload: &Value, key: &'static str, path: &str) -> Result<Vec<Condition>> {
    let children = match payload.as_array() {
        Some(children) if children.len() >= 2 => children,
        _ => {
            return Err(StructuralError::new(
                path,
                StructuralErrorKind::TooFewChildren(key),
            ))
        }
    };

    children
        .iter()
        .enumerate()
        .map(|(index, child)| parse_condition(child, &format!("{path}[{index}]")))
        .collect()
}
