// --- File: crates/roomify_common/src/lib.rs ---

// Declare modules within this crate
pub mod error;    // Error handling
pub mod features; // Feature flag handling
pub mod http;     // HTTP utilities
pub mod logging;  // Logging utilities
pub mod models;   // Shared domain models
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    conflict, config_error, external_service_error, internal_error, not_found, validation_error,
    HttpStatusCode, RoomifyError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{post, HTTP_CLIENT},
    handle_json_result, IntoHttpResponse,
};

// Re-export feature flag handling utilities for easier access
pub use features::is_feature_enabled;
