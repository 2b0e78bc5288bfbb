// --- File: crates/roomify_booking/src/routes.rs ---

use crate::feed::{BookingFeed, DEFAULT_POLL_INTERVAL_SECS};
use crate::handlers::{
    book_slot_handler, get_availability_handler, get_slots_handler, list_bookings_handler,
    live_bookings_handler, BookingState, DEFAULT_NAMESPACE,
};
use axum::{
    routing::{get, post},
    Router,
};
use roomify_common::services::{BookingStore, BoxedError};
use roomify_config::AppConfig;
use std::sync::Arc;
use std::time::Duration;

/// Creates a router containing all routes for the booking feature.
///
/// Spawns the live booking feed for the configured namespace; the feed stops
/// when the router (and its state) is dropped. Must be called from within a
/// Tokio runtime.
pub fn routes(config: Arc<AppConfig>, store: Arc<dyn BookingStore<Error = BoxedError>>) -> Router {
    let namespace = config
        .firestore
        .as_ref()
        .map(|firestore| firestore.app_id.clone())
        .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string());
    let poll_interval = Duration::from_secs(
        config
            .firestore
            .as_ref()
            .and_then(|firestore| firestore.poll_interval_secs)
            .unwrap_or(DEFAULT_POLL_INTERVAL_SECS),
    );

    let feed = BookingFeed::spawn(store.clone(), namespace.clone(), poll_interval);
    let state = Arc::new(BookingState {
        config,
        namespace,
        store,
        feed,
    });

    Router::new()
        .route("/slots", get(get_slots_handler))
        .route("/availability", get(get_availability_handler))
        .route("/book", post(book_slot_handler))
        .route("/bookings", get(list_bookings_handler))
        .route("/bookings/live", get(live_bookings_handler))
        .with_state(state)
}
