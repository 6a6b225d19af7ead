//! Promo Runtime - Evaluation engine for promocode restrictions
//!
//! Walks a validated `Condition` tree against a per-request
//! `EvaluationContext` and produces the `ValidationResult` tree returned to
//! clients. Also hosts the weather lookup boundary the context builder
//! calls before evaluation starts.

pub mod context;
pub mod error;
pub mod evaluator;
pub mod result;
pub mod service;

// Re-export commonly used types
pub use context::{EvaluationContext, WeatherContext};
pub use error::{EvalError, WeatherError};
pub use evaluator::{evaluate, evaluate_restrictions};
pub use result::{Reason, ResultKind, ValidationResult};
pub use service::{MockWeatherService, OpenWeatherClient, Weather, WeatherService};
