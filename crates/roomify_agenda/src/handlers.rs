// --- File: crates/roomify_agenda/src/handlers.rs ---
use crate::error::AgendaError;
use crate::logic::{draft_agenda, DraftAgendaRequest, DraftAgendaResponse};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use roomify_common::services::AgendaBrief;
use roomify_common::{handle_json_result, RoomifyError};
use roomify_config::AppConfig;
use std::sync::Arc;
use tracing::error;

/// Handler to draft a meeting agenda.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/agenda/draft", // Path relative to /api
    request_body = DraftAgendaRequest,
    responses(
        (status = 200, description = "The drafted agenda text", body = DraftAgendaResponse),
        (status = 400, description = "Missing name, date or room"),
        (status = 429, description = "Generation endpoint rate limited after retries"),
        (status = 502, description = "Generation endpoint failed or returned no usable text"),
        (status = 503, description = "Agenda feature disabled")
    ),
    tag = "Agenda"
))]
pub async fn draft_agenda_handler(
    State(config): State<Arc<AppConfig>>,
    Json(request): Json<DraftAgendaRequest>,
) -> Result<Json<DraftAgendaResponse>, Response> {
    // Ensure the agenda feature is enabled via runtime config
    if !config.use_agenda {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            "Agenda service is disabled.".to_string(),
        )
            .into_response());
    }

    let Some(agenda_config) = config.agenda.as_ref() else {
        return Err(RoomifyError::from(AgendaError::ConfigError).into_response());
    };

    let brief = AgendaBrief {
        room: request.room,
        date: request.date,
        organizer: request.user_name,
    };

    handle_json_result(
        draft_agenda(agenda_config, &brief)
            .await
            .map(|agenda| DraftAgendaResponse { agenda })
            .map_err(|err| {
                error!("Agenda drafting failed: {}", err);
                RoomifyError::from(err)
            }),
    )
}
