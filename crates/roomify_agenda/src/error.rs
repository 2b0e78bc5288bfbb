// --- File: crates/roomify_agenda/src/error.rs ---
use roomify_common::{external_service_error, HttpStatusCode, RoomifyError};
use thiserror::Error;

/// Agenda-drafting specific error types.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Error occurred during the HTTP request to the generation endpoint
    #[error("Agenda request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-success response from the generation endpoint (other than 429)
    #[error("Generation API returned an error: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Still rate limited after the bounded retries
    #[error("Generation API rate limited after {0} attempts")]
    RateLimited(u32),

    /// Error parsing the generation response
    #[error("Failed to parse generation response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Missing or incomplete agenda configuration
    #[error("Agenda configuration missing or incomplete")]
    ConfigError,

    /// The response carried no usable candidate text
    #[error("The model returned an empty response")]
    EmptyResponse,

    /// Missing inputs for the prompt
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Convert AgendaError to RoomifyError
impl From<AgendaError> for RoomifyError {
    fn from(err: AgendaError) -> Self {
        match err {
            AgendaError::RequestError(e) => {
                RoomifyError::HttpError(format!("Agenda request error: {}", e))
            }
            AgendaError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Generation API",
                format!("Status: {}, Message: {}", status_code, message),
            ),
            AgendaError::RateLimited(attempts) => {
                RoomifyError::RateLimitError(format!("gave up after {} attempts", attempts))
            }
            AgendaError::ParseError(e) => {
                RoomifyError::ParseError(format!("Generation response parse error: {}", e))
            }
            AgendaError::ConfigError => {
                RoomifyError::ConfigError("Agenda configuration missing or incomplete".to_string())
            }
            AgendaError::EmptyResponse => {
                external_service_error("Generation API", "empty response")
            }
            AgendaError::Validation(msg) => RoomifyError::ValidationError(msg),
        }
    }
}

/// Implement HttpStatusCode for AgendaError to provide a consistent way to
/// convert it to HTTP status codes.
impl HttpStatusCode for AgendaError {
    fn status_code(&self) -> u16 {
        match self {
            AgendaError::RequestError(_) => 502,
            AgendaError::ApiError { .. } => 502,
            AgendaError::RateLimited(_) => 429,
            AgendaError::ParseError(_) => 502,
            AgendaError::ConfigError => 500,
            AgendaError::EmptyResponse => 502,
            AgendaError::Validation(_) => 400,
        }
    }
}
