// --- File: crates/roomify_agenda/src/logic.rs ---
use crate::error::AgendaError;
use reqwest::StatusCode;
use roomify_common::http::client::post;
use roomify_common::services::AgendaBrief;
use roomify_config::AgendaConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Production endpoint of the generateContent API family.
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Total attempts against the generation endpoint: the first call plus two
/// retries on rate limiting.
pub const MAX_ATTEMPTS: u32 = 3;

/// Backoff before the first retry; doubles per attempt.
const INITIAL_BACKOFF: Duration = Duration::from_secs(1);

// --- Data Structures ---

/// Request from our frontend to draft a meeting agenda.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DraftAgendaRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub user_name: String,
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-06-01"))]
    pub date: String,
    #[cfg_attr(feature = "openapi", schema(example = "Sala de Reunião 2º andar"))]
    pub room: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct DraftAgendaResponse {
    pub agenda: String,
}

// --- Wire types of the generateContent endpoint ---

#[derive(Serialize, Debug)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize, Debug)]
struct Part {
    text: String,
}

#[derive(Deserialize, Debug)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize, Debug)]
struct Candidate {
    content: Option<Content>,
}

// --- Core Logic ---

/// Builds the natural-language prompt for the given brief.
pub fn build_prompt(brief: &AgendaBrief) -> String {
    format!(
        "Draft a professional and friendly agenda for a meeting.\n\
         The meeting takes place in \"{}\" on {}.\n\
         The organizer is {}. Include 3 to 5 key points for the meeting agenda.\n\
         Do not add a title to the agenda. Just the points.",
        brief.room, brief.date, brief.organizer
    )
}

fn endpoint_url(config: &AgendaConfig) -> String {
    let base = config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
    let mut url = format!("{}/models/{}:generateContent", base, config.model);
    if let Some(api_key) = &config.api_key {
        url.push_str("?key=");
        url.push_str(api_key);
    }
    url
}

fn extract_text(response: GenerateContentResponse) -> Option<String> {
    response
        .candidates
        .into_iter()
        .next()?
        .content?
        .parts
        .into_iter()
        .next()
        .map(|part| part.text)
        .filter(|text| !text.is_empty())
}

/// Drafts a meeting agenda for the brief.
///
/// Sends one generateContent request. A 429 response is retried up to two
/// additional times with exponentially doubling backoff starting at one
/// second; any other non-success response fails immediately. On success the
/// first candidate's text is returned. This call has no bearing on booking
/// correctness.
pub async fn draft_agenda(
    config: &AgendaConfig,
    brief: &AgendaBrief,
) -> Result<String, AgendaError> {
    if brief.organizer.trim().is_empty()
        || brief.date.trim().is_empty()
        || brief.room.trim().is_empty()
    {
        return Err(AgendaError::Validation(
            "Please provide your name, a date and a room to draft an agenda".to_string(),
        ));
    }

    let payload = GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: build_prompt(brief),
            }],
        }],
    };
    let url = endpoint_url(config);

    let mut backoff = INITIAL_BACKOFF;
    for attempt in 1..=MAX_ATTEMPTS {
        let response = post(&url, &payload).await?;
        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            if attempt == MAX_ATTEMPTS {
                return Err(AgendaError::RateLimited(MAX_ATTEMPTS));
            }
            warn!(
                "Generation endpoint rate limited (attempt {}), retrying in {:?}",
                attempt, backoff
            );
            tokio::time::sleep(backoff).await;
            backoff *= 2;
            continue;
        }

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(AgendaError::ApiError {
                status_code: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let parsed: GenerateContentResponse = serde_json::from_str(&body)?;
        let text = extract_text(parsed).ok_or(AgendaError::EmptyResponse)?;
        info!("Agenda drafted for {} ({} chars)", brief.date, text.len());
        return Ok(text);
    }

    Err(AgendaError::RateLimited(MAX_ATTEMPTS))
}
