// --- File: crates/services/roomify_backend/src/service_factory.rs ---
//! Service factory implementation.
//!
//! Selects the concrete service implementations from the runtime flags in
//! the configuration: the Firestore store when `use_firestore` is set with a
//! `firestore` section, the in-memory store otherwise; the Gemini agenda
//! generator when `use_agenda` is set with an `agenda` section.

use roomify_agenda::GeminiAgendaGenerator;
use roomify_booking::store::MemoryBookingStore;
use roomify_common::is_feature_enabled;
use roomify_common::services::{AgendaGenerator, BookingStore, BoxedError, ServiceFactory};
use roomify_config::AppConfig;
use roomify_firestore::FirestoreBookingStore;
use std::sync::Arc;
use tracing::{info, warn};

pub struct RoomifyServiceFactory {
    booking_store: Arc<dyn BookingStore<Error = BoxedError>>,
    agenda_generator: Option<Arc<dyn AgendaGenerator<Error = BoxedError>>>,
}

impl RoomifyServiceFactory {
    /// Create a new service factory from the loaded configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let booking_store: Arc<dyn BookingStore<Error = BoxedError>> =
            if is_feature_enabled(&config, config.use_firestore, config.firestore.as_ref()) {
                let firestore = config.firestore.clone().expect("checked above");
                info!(
                    "ℹ️ Initializing Firestore booking store (project {}, namespace {})",
                    firestore.project_id, firestore.app_id
                );
                Arc::new(FirestoreBookingStore::from_config(firestore))
            } else {
                warn!("Firestore disabled, bookings are kept in memory only");
                Arc::new(MemoryBookingStore::new())
            };

        let agenda_generator: Option<Arc<dyn AgendaGenerator<Error = BoxedError>>> =
            if is_feature_enabled(&config, config.use_agenda, config.agenda.as_ref()) {
                let agenda = config.agenda.clone().expect("checked above");
                info!("ℹ️ Initializing agenda generator (model {})", agenda.model);
                Some(Arc::new(GeminiAgendaGenerator::new(agenda)))
            } else {
                None
            };

        Self {
            booking_store,
            agenda_generator,
        }
    }
}

impl ServiceFactory for RoomifyServiceFactory {
    fn booking_store(&self) -> Option<Arc<dyn BookingStore<Error = BoxedError>>> {
        Some(self.booking_store.clone())
    }

    fn agenda_generator(&self) -> Option<Arc<dyn AgendaGenerator<Error = BoxedError>>> {
        self.agenda_generator.clone()
    }
}
