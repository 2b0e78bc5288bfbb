// --- File: crates/roomify_booking/src/store.rs ---
//! In-memory booking store.
//!
//! Used as the fallback when the Firestore feature is disabled at runtime,
//! and by tests. Bookings live only as long as the process; the namespace
//! scoping matches the document store contract.

use chrono::Utc;
use roomify_common::models::{Booking, NewBooking};
use roomify_common::services::{BookingStore, BoxFuture, BoxedError};
use std::collections::HashMap;
use std::sync::Mutex;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct MemoryBookingStore {
    bookings: Mutex<HashMap<String, Vec<Booking>>>,
}

impl MemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BookingStore for MemoryBookingStore {
    type Error = BoxedError;

    fn list_bookings(&self, namespace: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error> {
        let namespace = namespace.to_owned();
        Box::pin(async move {
            let guard = self.bookings.lock().expect("booking store lock poisoned");
            Ok(guard.get(&namespace).cloned().unwrap_or_default())
        })
    }

    fn find_booking(
        &self,
        namespace: &str,
        date: &str,
        time: &str,
        room: &str,
    ) -> BoxFuture<'_, Option<Booking>, Self::Error> {
        let namespace = namespace.to_owned();
        let (date, time, room) = (date.to_owned(), time.to_owned(), room.to_owned());
        Box::pin(async move {
            let guard = self.bookings.lock().expect("booking store lock poisoned");
            Ok(guard.get(&namespace).and_then(|bookings| {
                bookings
                    .iter()
                    .find(|b| b.date == date && b.time == time && b.room == room)
                    .cloned()
            }))
        })
    }

    fn create_booking(
        &self,
        namespace: &str,
        booking: NewBooking,
    ) -> BoxFuture<'_, Booking, Self::Error> {
        let namespace = namespace.to_owned();
        Box::pin(async move {
            let booking = Booking {
                id: Uuid::new_v4().to_string(),
                user_name: booking.user_name,
                date: booking.date,
                time: booking.time,
                room: booking.room,
                created_at: Utc::now().to_rfc3339(),
            };
            let mut guard = self.bookings.lock().expect("booking store lock poisoned");
            guard
                .entry(namespace)
                .or_default()
                .push(booking.clone());
            Ok(booking)
        })
    }
}
