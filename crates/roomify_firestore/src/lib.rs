//! Firestore document store integration for Roomify
//!
//! This crate provides the [`BookingStore`](roomify_common::services::BookingStore)
//! implementation backed by the Firestore REST v1 API.
//!
//! # Features
//!
//! - Authentication with Google using service account credentials
//! - Listing, querying and appending booking documents under the namespaced
//!   collection `artifacts/{app_id}/public/data/{collection}`
//! - Unauthenticated mode for the Firestore emulator and tests (no key path
//!   configured)
//!
//! # Example
//!
//! ```rust,no_run
//! use roomify_config::FirestoreConfig;
//! use roomify_firestore::FirestoreBookingStore;
//!
//! let config = FirestoreConfig {
//!     project_id: "my-project".to_string(),
//!     key_path: Some("/path/to/service-account.json".to_string()),
//!     app_id: "default-app-id".to_string(),
//!     collection: "roomify_bookings".to_string(),
//!     base_url: None,
//!     poll_interval_secs: None,
//! };
//! let store = FirestoreBookingStore::from_config(config);
//! ```

pub mod auth;
pub mod client;
pub mod models;
pub mod store;

// Re-export the main entry points
pub use client::{FirestoreClient, FirestoreError};
pub use store::FirestoreBookingStore;
