// --- File: crates/roomify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Firestore Config ---
// Holds non-secret Firestore config. The service account key is referenced by
// path; its contents never pass through this struct.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct FirestoreConfig {
    pub project_id: String,
    /// Path to the service account key JSON. When absent the client sends
    /// unauthenticated requests (emulator / local testing).
    pub key_path: Option<String>,
    /// Deployment namespace: every booking written or read by this
    /// installation lives under `artifacts/{app_id}/public/data`.
    pub app_id: String,
    /// Collection holding the booking documents.
    #[serde(default = "default_collection")]
    pub collection: String,
    /// Base URL override for the Firestore REST endpoint (emulator / tests).
    pub base_url: Option<String>,
    /// How often the live booking feed reloads the full set, in seconds.
    pub poll_interval_secs: Option<u64>,
}

fn default_collection() -> String {
    "roomify_bookings".to_string()
}

// --- Agenda (generative text) Config ---
// Holds non-secret agenda config. API key loaded via env:
// ROOMIFY_AGENDA__API_KEY (or a dotenv file).
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgendaConfig {
    /// Base URL override for the generateContent endpoint (tests).
    pub base_url: Option<String>,
    pub model: String,
    pub api_key: Option<String>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_firestore: bool,
    #[serde(default)]
    pub use_agenda: bool,

    // --- Optional Feature Configurations ---
    #[serde(default)]
    pub firestore: Option<FirestoreConfig>,
    #[serde(default)]
    pub agenda: Option<AgendaConfig>,
}
