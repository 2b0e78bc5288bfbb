//! Authentication module for the Firestore REST API
//!
//! Generates OAuth2 access tokens from a service account key file. Tokens
//! carry the Cloud Datastore scope, which covers Firestore document access.

use roomify_config::FirestoreConfig;
use std::{error::Error, path::Path};
use yup_oauth2::{read_service_account_key, ServiceAccountAuthenticator};

/// Obtains an OAuth2 access token for the Firestore REST API.
///
/// # Errors
///
/// This function will return an error if:
/// * The key_path is missing from the FirestoreConfig
/// * The service account key file cannot be read
/// * Authentication with Google's OAuth2 service fails
/// * No token is returned from the authentication service
pub async fn get_firestore_auth_token(
    config: &FirestoreConfig,
) -> Result<String, Box<dyn Error + Send + Sync>> {
    let key_path = config
        .key_path
        .as_deref()
        .ok_or("Missing key_path in FirestoreConfig")?;

    let sa_key = read_service_account_key(Path::new(key_path)).await?;

    // Firestore document access is covered by the datastore scope
    let auth = ServiceAccountAuthenticator::builder(sa_key).build().await?;

    let auth_token = auth
        .token(&["https://www.googleapis.com/auth/datastore"])
        .await?;
    let access_token = match auth_token.token() {
        Some(token) => token,
        None => {
            return Err("No token available".into());
        }
    };

    Ok(access_token.to_string())
}
