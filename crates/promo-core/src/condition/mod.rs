//! Condition Tree Module
//!
//! Promocode restrictions are recursive predicate trees: three leaf shapes
//! (age, date, weather) composed with `or`/`and` nodes of arity >= 2.
//!
//! # Wire format
//!
//! Every node is a single-key object naming its kind:
//!
//! ```json
//! { "age": { "gt": 18 } }
//! { "date": { "after": "2024-01-01", "before": "2024-12-31" } }
//! { "weather": { "is": "Clear", "temp": { "gt": 15 } } }
//! { "or": [ { "age": { "lt": 30 } }, { "age": { "eq": 40 } } ] }
//! { "and": [ ... ] }
//! ```
//!
//! Trees arrive untyped over HTTP; [`parse_restrictions`] turns them into
//! [`Condition`] values or reports the first structural violation with the
//! path of the offending node.

mod parser;
mod types;

pub use parser::{parse_condition, parse_restrictions};
pub use types::{Condition, DateRange, NumberComparison, WeatherComparison, WeatherKind};
