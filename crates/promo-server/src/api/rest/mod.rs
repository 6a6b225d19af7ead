//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: request/response type definitions
//! - handlers: API endpoint handlers
//! - router: router creation and configuration

mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use router::create_router;
pub use types::{
    AppState, CreatePromocodePayload, HealthResponse, ValidateArguments,
    ValidatePromocodePayload, ValidatePromocodeResponse, ValidationStatus,
};
