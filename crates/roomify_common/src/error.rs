// --- File: crates/roomify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Roomify errors.
///
/// This enum provides a common set of error variants that can be used across
/// all crates. Each crate extends this by implementing
/// `From<SpecificError> for RoomifyError`.
#[derive(Error, Debug)]
pub enum RoomifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred while parsing data
    #[error("Failed to parse data: {0}")]
    ParseError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during a document store operation
    #[error("Store error: {0}")]
    StoreError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already reserved)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to rate limiting
    #[error("Rate limited: {0}")]
    RateLimitError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
///
/// This trait can be implemented by error types to provide a consistent way
/// to convert errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for RoomifyError {
    fn status_code(&self) -> u16 {
        match self {
            RoomifyError::HttpError(_) => 500,
            RoomifyError::ParseError(_) => 400,
            RoomifyError::ConfigError(_) => 500,
            RoomifyError::ValidationError(_) => 400,
            RoomifyError::StoreError(_) => 500,
            RoomifyError::ExternalServiceError { .. } => 502,
            RoomifyError::ConflictError(_) => 409,
            RoomifyError::NotFoundError(_) => 404,
            RoomifyError::RateLimitError(_) => 429,
            RoomifyError::InternalError(_) => 500,
        }
    }
}

// Common error conversions
impl From<reqwest::Error> for RoomifyError {
    fn from(err: reqwest::Error) -> Self {
        RoomifyError::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for RoomifyError {
    fn from(err: serde_json::Error) -> Self {
        RoomifyError::ParseError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> RoomifyError {
    RoomifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> RoomifyError {
    RoomifyError::ValidationError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> RoomifyError {
    RoomifyError::NotFoundError(message.to_string())
}

pub fn conflict<T: fmt::Display>(message: T) -> RoomifyError {
    RoomifyError::ConflictError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> RoomifyError {
    RoomifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

pub fn internal_error<T: fmt::Display>(message: T) -> RoomifyError {
    RoomifyError::InternalError(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(validation_error("missing name").status_code(), 400);
        assert_eq!(conflict("slot taken").status_code(), 409);
        assert_eq!(not_found("no such booking").status_code(), 404);
        assert_eq!(
            external_service_error("Gemini API", "boom").status_code(),
            502
        );
        assert_eq!(RoomifyError::RateLimitError("429".into()).status_code(), 429);
        assert_eq!(config_error("bad").status_code(), 500);
        assert_eq!(internal_error("bad").status_code(), 500);
    }
}
