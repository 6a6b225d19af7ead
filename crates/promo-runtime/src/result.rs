//! Validation result tree
//!
//! Mirrors the shape of the condition tree it was produced from. Composite
//! nodes always carry their children's results in `reasons`, even on
//! success; leaf nodes only carry `reasons` when they failed, and the
//! field's absence is the success signal response serialization relies on.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind tag carried by every result node
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Age,
    Date,
    /// Nested temperature check inside a weather condition
    Temperature,
    Weather,
    Or,
    And,
    /// The implicit OR over a promocode's restriction list
    Restrictions,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultKind::Age => "age",
            ResultKind::Date => "date",
            ResultKind::Temperature => "temperature",
            ResultKind::Weather => "weather",
            ResultKind::Or => "or",
            ResultKind::And => "and",
            ResultKind::Restrictions => "restrictions",
        };
        f.write_str(name)
    }
}

/// One entry in a result's `reasons` list.
///
/// Leaf violations are plain messages; composite children and failed nested
/// temperature checks are whole sub-results. Serialized untagged, so the
/// wire shape of each entry is `string | object`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Reason {
    Message(String),
    Nested(ValidationResult),
}

/// Outcome of evaluating one condition node
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ValidationResult {
    #[serde(rename = "condition")]
    pub kind: ResultKind,
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasons: Option<Vec<Reason>>,
}

impl ValidationResult {
    /// Leaf result: succeeds when no violation was recorded, and only
    /// attaches `reasons` on failure
    pub fn leaf(kind: ResultKind, reasons: Vec<Reason>) -> Self {
        let success = reasons.is_empty();
        Self {
            kind,
            success,
            reasons: if success { None } else { Some(reasons) },
        }
    }

    /// Composite result with OR semantics: any child success wins.
    /// Children are always attached, note the empty-list consequence:
    /// no children means no success.
    pub fn any_of(kind: ResultKind, children: Vec<ValidationResult>) -> Self {
        let success = children.iter().any(|child| child.success);
        Self::composite(kind, success, children)
    }

    /// Composite result with AND semantics: every child must succeed
    pub fn all_of(kind: ResultKind, children: Vec<ValidationResult>) -> Self {
        let success = children.iter().all(|child| child.success);
        Self::composite(kind, success, children)
    }

    fn composite(kind: ResultKind, success: bool, children: Vec<ValidationResult>) -> Self {
        Self {
            kind,
            success,
            reasons: Some(children.into_iter().map(Reason::Nested).collect()),
        }
    }
}
