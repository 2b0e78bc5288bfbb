// --- File: crates/services/roomify_backend/src/app_state.rs ---
use crate::service_factory::RoomifyServiceFactory;
use roomify_config::AppConfig;
use std::sync::Arc;

/// Application state shared by the backend's own routes.
///
/// Feature routers (booking, agenda) carry their own state; this one backs
/// the root and status endpoints.
#[derive(Clone)]
pub struct AppState {
    /// The application configuration loaded at startup.
    pub config: Arc<AppConfig>,

    /// Factory giving access to the configured service implementations.
    pub service_factory: Arc<RoomifyServiceFactory>,
}
