//! Error types for Promo Core

use thiserror::Error;

/// A structural violation found in a submitted restriction tree, together
/// with the JSON path of the offending node (e.g. `restrictions[1].or[0]`).
#[derive(Debug, Error)]
#[error("{path}: {kind}")]
pub struct StructuralError {
    /// Path of the node that broke a structural rule
    pub path: String,
    /// The rule it broke
    pub kind: StructuralErrorKind,
}

impl StructuralError {
    pub(crate) fn new(path: impl Into<String>, kind: StructuralErrorKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }
}

/// The structural rules a condition node can violate
#[derive(Debug, Error)]
pub enum StructuralErrorKind {
    #[error("expected an object with exactly one of `age`, `date`, `weather`, `or`, `and`")]
    UnknownShape,

    #[error("invalid `{key}` payload: {message}")]
    Payload { key: &'static str, message: String },

    #[error("at least one of `eq`, `gt`, `lt` must be set")]
    EmptyComparison,

    #[error("at least one of `after`, `before` must be set")]
    EmptyDateRange,

    #[error("`{0}` requires an array of at least two conditions")]
    TooFewChildren(&'static str),
}

pub type Result<T> = std::result::Result<T, StructuralError>;
