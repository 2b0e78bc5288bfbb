// File: crates/roomify_agenda/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::logic::{DraftAgendaRequest, DraftAgendaResponse};

#[derive(OpenApi)]
#[openapi(
    paths(crate::handlers::draft_agenda_handler),
    components(
        schemas(
            DraftAgendaRequest,
            DraftAgendaResponse
        )
    ),
    tags(
        (name = "Agenda", description = "Meeting agenda drafting API")
    ),
    servers(
        (url = "/api", description = "Agenda API server")
    )
)]
pub struct AgendaApiDoc;
