//! Promo Core - Core types for the promocode validation service
//!
//! This crate provides the types shared across the service:
//! - The recursive `Condition` tree and its leaf payloads
//! - Structural validation of untyped condition JSON
//! - The `Promocode` record stored and echoed by the API

pub mod condition;
pub mod error;
pub mod promocode;

// Re-export commonly used types
pub use condition::{
    Condition, DateRange, NumberComparison, WeatherComparison, WeatherKind,
};
pub use error::{StructuralError, StructuralErrorKind};
pub use promocode::{Advantage, Promocode};
