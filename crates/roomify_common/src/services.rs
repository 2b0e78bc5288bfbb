// --- File: crates/roomify_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services used by
//! the application. These traits allow for dependency injection and easier
//! testing by decoupling the application logic from specific implementations.

use crate::models::{Booking, NewBooking};
use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for
/// `Box<dyn std::error::Error + Send + Sync>`
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for the namespaced booking document store.
///
/// All operations are scoped to a deployment namespace; every client sharing
/// the namespace sees the same booking set. The store assigns document ids
/// and creation timestamps on `create_booking`.
pub trait BookingStore: Send + Sync {
    /// Error type returned by store operations.
    type Error: StdError + Send + Sync + 'static;

    /// Load the complete current booking set for the namespace.
    fn list_bookings(&self, namespace: &str) -> BoxFuture<'_, Vec<Booking>, Self::Error>;

    /// Look up a booking matching the (date, time, room) triple exactly.
    fn find_booking(
        &self,
        namespace: &str,
        date: &str,
        time: &str,
        room: &str,
    ) -> BoxFuture<'_, Option<Booking>, Self::Error>;

    /// Append one booking document and return it with id and timestamp set.
    fn create_booking(
        &self,
        namespace: &str,
        booking: NewBooking,
    ) -> BoxFuture<'_, Booking, Self::Error>;
}

/// Inputs for drafting a meeting agenda.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgendaBrief {
    /// The room the meeting takes place in.
    pub room: String,
    /// The meeting date, `YYYY-MM-DD`.
    pub date: String,
    /// Name of the meeting organizer.
    pub organizer: String,
}

/// A trait for the generative-text collaborator that drafts agendas.
pub trait AgendaGenerator: Send + Sync {
    /// Error type returned by the generator.
    type Error: StdError + Send + Sync + 'static;

    /// Draft an agenda for the given brief, returning the plain text.
    fn draft_agenda(&self, brief: AgendaBrief) -> BoxFuture<'_, String, Self::Error>;
}

/// Factory giving access to the configured service implementations.
pub trait ServiceFactory: Send + Sync {
    /// Get the booking store instance.
    fn booking_store(&self) -> Option<Arc<dyn BookingStore<Error = BoxedError>>>;

    /// Get the agenda generator instance, when the feature is configured.
    fn agenda_generator(&self) -> Option<Arc<dyn AgendaGenerator<Error = BoxedError>>>;
}
