//! Promocode records

use crate::condition::Condition;
use serde::{Deserialize, Serialize};

/// A stored promocode: a discount plus the restriction tree gating it.
///
/// `restrictions` combine as an OR - the code is granted when any entry
/// succeeds, which also means an empty list never grants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Promocode {
    /// Unique key clients validate against
    pub name: String,
    /// Discount granted on acceptance
    pub advantage: Advantage,
    /// OR-combined condition trees
    pub restrictions: Vec<Condition>,
}

/// The discount granted when a promocode is accepted
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Advantage {
    pub percent: f64,
}
