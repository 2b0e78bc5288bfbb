// File: crates/roomify_booking/src/handlers.rs
use crate::catalog::{generate_time_slots, rooms};
use crate::feed::BookingFeed;
use crate::logic::{reserve, slot_grid, BookSlotRequest, BookingError, BookingResponse, SlotStatus};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    response::Json,
};
use roomify_common::models::Booking;
use roomify_common::services::{BookingStore, BoxedError};
use roomify_common::HttpStatusCode;
use roomify_config::AppConfig;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use tracing::{error, info};

/// Namespace used when no Firestore configuration is present. Matches the
/// installation-default namespace of deployments that never set one.
pub const DEFAULT_NAMESPACE: &str = "default-app-id";

// Define shared state needed by booking handlers
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub namespace: String,
    pub store: Arc<dyn BookingStore<Error = BoxedError>>,
    pub feed: BookingFeed,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotCatalogResponse {
    /// The 21 bookable `HH:MM` labels in day order.
    pub slots: Vec<String>,
    /// The fixed room enumeration.
    pub rooms: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams, utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct AvailabilityQuery {
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-06-01"))]
    pub date: String,

    /// Room name from the fixed enumeration
    #[cfg_attr(feature = "openapi", schema(example = "Sala de Reunião 2º andar"))]
    pub room: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct AvailabilityResponse {
    pub date: String,
    pub room: String,
    pub slots: Vec<SlotStatus>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingsResponse {
    pub bookings: Vec<Booking>,
}

fn error_response<E: HttpStatusCode + std::fmt::Display>(err: E) -> (StatusCode, String) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, err.to_string())
}

/// Handler returning the fixed slot catalog and room enumeration.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/slots", // Path relative to /api
    responses(
        (status = 200, description = "The slot catalog and room list", body = SlotCatalogResponse),
    ),
    tag = "Booking"
))]
pub async fn get_slots_handler(
    State(_state): State<Arc<BookingState>>,
) -> Json<SlotCatalogResponse> {
    Json(SlotCatalogResponse {
        slots: generate_time_slots(),
        rooms: rooms().iter().map(|room| room.to_string()).collect(),
    })
}

/// Handler returning the per-slot booked flags for a date and room, based on
/// the current feed snapshot. The snapshot can lag the store by one poll
/// interval; `/book` re-checks against the store itself.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/availability", // Path relative to /api
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Booked flag per catalog slot", body = AvailabilityResponse),
        (status = 400, description = "Missing date or room"),
    ),
    tag = "Booking"
))]
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, (StatusCode, String)> {
    if query.date.trim().is_empty() || query.room.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            "date and room must not be empty".to_string(),
        ));
    }

    let bookings = state.feed.current();
    let slots = slot_grid(&query.date, &query.room, &bookings);
    Ok(Json(AvailabilityResponse {
        date: query.date,
        room: query.room,
        slots,
    }))
}

/// Handler to reserve a slot.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/book", // Path relative to /api
    request_body = BookSlotRequest,
    responses(
        (status = 200, description = "Booking created", body = BookingResponse),
        (status = 400, description = "Validation failure (empty name or missing field)"),
        (status = 409, description = "Slot already reserved"),
        (status = 500, description = "Store failure")
    ),
    tag = "Booking"
))]
pub async fn book_slot_handler(
    State(state): State<Arc<BookingState>>,
    Json(request): Json<BookSlotRequest>,
) -> Result<Json<BookingResponse>, (StatusCode, String)> {
    match reserve(state.store.as_ref(), &state.namespace, request).await {
        Ok(booking) => {
            info!(
                "Booking {} created for {} / {} / {}",
                booking.id, booking.date, booking.time, booking.room
            );
            Ok(Json(BookingResponse {
                success: true,
                booking,
                message: "Booking saved successfully".to_string(),
            }))
        }
        Err(err) => {
            match &err {
                // Validation and conflict outcomes are user-correctable.
                BookingError::Validation(_) | BookingError::Conflict => {}
                BookingError::Store(store_err) => {
                    error!("Failed to persist booking: {}", store_err)
                }
            }
            Err(error_response(err))
        }
    }
}

/// Handler returning the complete current booking set (the read-only table).
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings", // Path relative to /api
    responses(
        (status = 200, description = "All bookings in the namespace", body = BookingsResponse),
    ),
    tag = "Booking"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<BookingState>>,
) -> Json<BookingsResponse> {
    Json(BookingsResponse {
        bookings: state.feed.current(),
    })
}

/// Handler streaming the complete booking set on every feed change as
/// server-sent events. The stream starts with the current snapshot.
pub async fn live_bookings_handler(
    State(state): State<Arc<BookingState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let receiver = state.feed.subscribe();
    let stream = WatchStream::new(receiver).map(|bookings| {
        let payload = serde_json::to_string(&bookings).unwrap_or_else(|_| "[]".to_string());
        Ok(Event::default().data(payload))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(15))
            .text("keep-alive"),
    )
}
