// --- File: crates/roomify_common/src/models.rs ---
//! Domain models shared across the Roomify crates.

use serde::{Deserialize, Serialize};

/// A persisted room reservation.
///
/// For any fixed (date, room, time) triple at most one Booking may exist;
/// that uniqueness is checked before every write but is not enforced
/// atomically by the store. Bookings are never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Booking {
    /// Opaque identifier assigned by the persistence layer on creation.
    pub id: String,
    /// Free-text name of the requester. A label, not an access-control key.
    pub user_name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Slot label from the catalog, `HH:MM`.
    pub time: String,
    /// One of the fixed room names.
    pub room: String,
    /// RFC 3339 creation timestamp, set once at write time.
    pub created_at: String,
}

/// A reservation before the store has assigned id and timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct NewBooking {
    pub user_name: String,
    pub date: String,
    pub time: String,
    pub room: String,
}
