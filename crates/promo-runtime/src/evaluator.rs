//! Recursive evaluation of condition trees
//!
//! Pure and synchronous: one call walks one validated tree against one
//! immutable context and builds a fresh result tree. All I/O (the weather
//! lookup) happens earlier, in the context builder.

use crate::context::{EvaluationContext, WeatherContext};
use crate::error::EvalError;
use crate::result::{Reason, ResultKind, ValidationResult};
use chrono::{DateTime, Utc};
use promo_core::{Condition, DateRange, NumberComparison, WeatherComparison};

/// Evaluate a single condition node against the request context.
///
/// A leaf whose context field is absent (an age check without an age
/// argument, a weather check without a town) propagates
/// [`EvalError::MissingContext`] instead of producing a result.
pub fn evaluate(
    condition: &Condition,
    context: &EvaluationContext,
) -> Result<ValidationResult, EvalError> {
    match condition {
        Condition::Age(comparison) => {
            let age = context.age.ok_or(EvalError::MissingContext("age"))?;
            Ok(check_number(comparison, age, ResultKind::Age))
        }
        Condition::Date(range) => Ok(check_date(range, context.date)),
        Condition::Weather(comparison) => {
            let weather = context
                .weather
                .as_ref()
                .ok_or(EvalError::MissingContext("weather"))?;
            Ok(check_weather(comparison, weather))
        }
        Condition::Or(children) => {
            let results = children
                .iter()
                .map(|child| evaluate(child, context))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ValidationResult::any_of(ResultKind::Or, results))
        }
        Condition::And(children) => {
            let results = children
                .iter()
                .map(|child| evaluate(child, context))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(ValidationResult::all_of(ResultKind::And, results))
        }
    }
}

/// Evaluate a promocode's restriction list.
///
/// Restrictions combine as an OR, so an empty list rejects: there is no
/// entry that could succeed.
pub fn evaluate_restrictions(
    restrictions: &[Condition],
    context: &EvaluationContext,
) -> Result<ValidationResult, EvalError> {
    let results = restrictions
        .iter()
        .map(|condition| evaluate(condition, context))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ValidationResult::any_of(ResultKind::Restrictions, results))
}

fn check_number(comparison: &NumberComparison, n: f64, kind: ResultKind) -> ValidationResult {
    let mut reasons = Vec::new();

    if let Some(eq) = comparison.eq {
        if eq != n {
            reasons.push(Reason::Message(format!(
                "Given {kind} {n} is not equal to {eq}"
            )));
        }
    }
    if let Some(gt) = comparison.gt {
        if gt >= n {
            reasons.push(Reason::Message(format!(
                "Given {kind} {n} is not greater than {gt}"
            )));
        }
    }
    if let Some(lt) = comparison.lt {
        if lt <= n {
            reasons.push(Reason::Message(format!(
                "Given {kind} {n} is not less than {lt}"
            )));
        }
    }

    ValidationResult::leaf(kind, reasons)
}

fn check_date(range: &DateRange, date: DateTime<Utc>) -> ValidationResult {
    // comparisons on full instants, messages at day granularity
    let day = |instant: DateTime<Utc>| instant.format("%Y-%m-%d");
    let mut reasons = Vec::new();

    if let Some(after) = range.after {
        if after > date {
            reasons.push(Reason::Message(format!(
                "Given date {} is not after {}",
                day(date),
                day(after)
            )));
        }
    }
    if let Some(before) = range.before {
        if before < date {
            reasons.push(Reason::Message(format!(
                "Given date {} is not before {}",
                day(date),
                day(before)
            )));
        }
    }

    ValidationResult::leaf(ResultKind::Date, reasons)
}

fn check_weather(comparison: &WeatherComparison, weather: &WeatherContext) -> ValidationResult {
    let mut reasons = Vec::new();

    if comparison.is != weather.main {
        reasons.push(Reason::Message(format!(
            "Current weather for {} '{}' is not '{}'",
            weather.city, weather.main, comparison.is
        )));
    }

    if let Some(temp) = &comparison.temp {
        let result = check_number(temp, weather.temp, ResultKind::Temperature);
        if !result.success {
            reasons.push(Reason::Nested(result));
        }
    }

    ValidationResult::leaf(ResultKind::Weather, reasons)
}
