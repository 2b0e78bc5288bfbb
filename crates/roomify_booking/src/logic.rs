// --- File: crates/roomify_booking/src/logic.rs ---
use crate::catalog::generate_time_slots;
use roomify_common::models::{Booking, NewBooking};
use roomify_common::services::{BookingStore, BoxedError};
use roomify_common::{conflict, validation_error, HttpStatusCode, RoomifyError};
use serde::{Deserialize, Serialize};
use tracing::debug;

// --- Error Handling ---
use thiserror::Error;
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("This slot is already reserved")]
    Conflict,
    #[error("Store error: {0}")]
    Store(#[from] BoxedError),
}

impl From<BookingError> for RoomifyError {
    fn from(err: BookingError) -> Self {
        match err {
            BookingError::Validation(msg) => validation_error(msg),
            BookingError::Conflict => conflict("This slot is already reserved"),
            BookingError::Store(e) => RoomifyError::StoreError(e.to_string()),
        }
    }
}

impl HttpStatusCode for BookingError {
    fn status_code(&self) -> u16 {
        match self {
            BookingError::Validation(_) => 400,
            BookingError::Conflict => 409,
            BookingError::Store(_) => 500,
        }
    }
}

// --- Data Structures ---
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookSlotRequest {
    #[cfg_attr(feature = "openapi", schema(example = "Maria Silva"))]
    pub user_name: String,
    /// Date in YYYY-MM-DD format
    #[cfg_attr(feature = "openapi", schema(format = "date", example = "2024-06-01"))]
    pub date: String,
    /// Slot label from the catalog
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub time: String,
    #[cfg_attr(feature = "openapi", schema(example = "Sala de Reunião 2º andar"))]
    pub room: String,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct BookingResponse {
    pub success: bool,
    pub booking: Booking,
    #[cfg_attr(feature = "openapi", schema(example = "Booking saved successfully"))]
    pub message: String,
}

/// One entry of the bookable-slot grid for a given date and room.
#[derive(Serialize, Debug, Clone)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct SlotStatus {
    #[cfg_attr(feature = "openapi", schema(example = "09:00"))]
    pub time: String,
    pub booked: bool,
}

// --- Conflict Checking ---

/// Returns true iff `bookings` contains an entry matching the given
/// (date, time, room) triple exactly. Matching is case-sensitive; callers
/// supply already-normalized values.
pub fn is_slot_booked(date: &str, time: &str, room: &str, bookings: &[Booking]) -> bool {
    bookings
        .iter()
        .any(|booking| booking.date == date && booking.time == time && booking.room == room)
}

/// Crosses the slot catalog with the known bookings, yielding one entry per
/// catalog slot with its booked flag. Powers the 21-button grid.
pub fn slot_grid(date: &str, room: &str, bookings: &[Booking]) -> Vec<SlotStatus> {
    generate_time_slots()
        .into_iter()
        .map(|time| {
            let booked = is_slot_booked(date, &time, room, bookings);
            SlotStatus { time, booked }
        })
        .collect()
}

// --- Reservation Logic ---

/// Attempts to persist a new booking.
///
/// The (date, time, room) uniqueness re-check against the authoritative
/// store and the subsequent write are two separate operations; two attempts
/// racing on the same slot can both pass the check. Strict exclusivity
/// requires a server-side uniqueness constraint.
///
/// Exactly one document is appended on success; none on any failure path.
pub async fn reserve(
    store: &dyn BookingStore<Error = BoxedError>,
    namespace: &str,
    request: BookSlotRequest,
) -> Result<Booking, BookingError> {
    if request.user_name.trim().is_empty() {
        return Err(BookingError::Validation(
            "Please enter your name to make a booking".to_string(),
        ));
    }
    if request.date.trim().is_empty()
        || request.room.trim().is_empty()
        || request.time.trim().is_empty()
    {
        return Err(BookingError::Validation(
            "Please select a date, room and time".to_string(),
        ));
    }

    // Re-check against the authoritative store immediately before the write;
    // the live feed snapshot may be stale at this point.
    let existing = store
        .find_booking(namespace, &request.date, &request.time, &request.room)
        .await?;
    if existing.is_some() {
        return Err(BookingError::Conflict);
    }

    let booking = store
        .create_booking(
            namespace,
            NewBooking {
                user_name: request.user_name,
                date: request.date,
                time: request.time,
                room: request.room,
            },
        )
        .await?;

    debug!(
        "Reserved {} / {} / {} for {}",
        booking.date, booking.time, booking.room, booking.user_name
    );
    Ok(booking)
}
