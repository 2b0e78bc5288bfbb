// --- File: crates/roomify_agenda/src/routes.rs ---

use crate::handlers::draft_agenda_handler;
use axum::{routing::post, Router};
use roomify_config::AppConfig;
use std::sync::Arc;

/// Creates a router containing all routes for the agenda feature.
pub fn routes(config: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/agenda/draft", post(draft_agenda_handler))
        .with_state(config)
}
