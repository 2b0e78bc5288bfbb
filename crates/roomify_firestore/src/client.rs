//! Firestore REST client module
//!
//! This module provides a client for the Firestore REST v1 API, covering the
//! three operations the booking store needs: listing a collection, running an
//! equality query, and creating a document. Documents live under the
//! namespaced path `artifacts/{app_id}/public/data/{collection}`, the layout
//! shared by every client of a deployment.

use crate::auth::get_firestore_auth_token;
use crate::models::{Document, Value};
use reqwest::Client;
use roomify_common::{external_service_error, HttpStatusCode, RoomifyError};
use roomify_config::FirestoreConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Production endpoint of the Firestore REST v1 API.
const DEFAULT_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Page size used when listing the booking collection.
const LIST_PAGE_SIZE: u32 = 300;

/// Errors that can occur when interacting with the Firestore REST API
#[derive(Error, Debug)]
pub enum FirestoreError {
    /// Error during authentication with Google
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error during HTTP request to the Firestore API
    #[error("HTTP request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Error returned by the Firestore API
    #[error("Firestore API error: {message} (status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// A document that does not have the booking shape
    #[error("Malformed document: {0}")]
    MalformedDocument(String),
}

impl From<FirestoreError> for RoomifyError {
    fn from(err: FirestoreError) -> Self {
        match err {
            FirestoreError::AuthError(msg) => {
                RoomifyError::ConfigError(format!("Firestore auth: {}", msg))
            }
            FirestoreError::RequestError(e) => RoomifyError::HttpError(e.to_string()),
            FirestoreError::ApiError {
                status_code,
                message,
            } => external_service_error(
                "Firestore",
                format!("status: {}, message: {}", status_code, message),
            ),
            FirestoreError::MalformedDocument(msg) => RoomifyError::ParseError(msg),
        }
    }
}

impl HttpStatusCode for FirestoreError {
    fn status_code(&self) -> u16 {
        match self {
            FirestoreError::AuthError(_) => 500,
            FirestoreError::RequestError(_) => 502,
            FirestoreError::ApiError { .. } => 502,
            FirestoreError::MalformedDocument(_) => 500,
        }
    }
}

// --- Wire types for list and query requests ---

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    documents: Option<Vec<Document>>,
    next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunQueryRequest {
    structured_query: StructuredQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StructuredQuery {
    from: Vec<CollectionSelector>,
    #[serde(rename = "where")]
    filter: Filter,
    limit: i32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CollectionSelector {
    collection_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Filter {
    composite_filter: CompositeFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CompositeFilter {
    op: String,
    filters: Vec<FieldFilterClause>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilterClause {
    field_filter: FieldFilter,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldFilter {
    field: FieldReference,
    op: String,
    value: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FieldReference {
    field_path: String,
}

fn equality_clause(field_path: &str, value: &str) -> FieldFilterClause {
    FieldFilterClause {
        field_filter: FieldFilter {
            field: FieldReference {
                field_path: field_path.to_string(),
            },
            op: "EQUAL".to_string(),
            value: Value::StringValue(value.to_string()),
        },
    }
}

/// One element of the streamed runQuery response array. Elements without a
/// document carry only a read time.
#[derive(Debug, Deserialize)]
struct RunQueryResponseItem {
    document: Option<Document>,
}

/// Client for the Firestore REST v1 API
///
/// Handles authentication and the document operations behind the booking
/// store. When no service account key is configured the client sends
/// unauthenticated requests, which the emulator and test servers accept.
pub struct FirestoreClient {
    /// HTTP client for making requests to the Firestore API
    client: Client,

    /// Configuration, including project id and the namespaced layout
    config: FirestoreConfig,
}

impl FirestoreClient {
    /// Creates a new Firestore client with the given configuration
    pub fn new(config: FirestoreConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Resource path of the namespace parent document, without the base URL.
    fn parent_path(&self, namespace: &str) -> String {
        format!(
            "projects/{}/databases/(default)/documents/artifacts/{}/public/data",
            self.config.project_id, namespace
        )
    }

    fn collection_url(&self, namespace: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url(),
            self.parent_path(namespace),
            self.config.collection
        )
    }

    async fn bearer_token(&self) -> Result<Option<String>, FirestoreError> {
        if self.config.key_path.is_none() {
            return Ok(None);
        }
        get_firestore_auth_token(&self.config)
            .await
            .map(Some)
            .map_err(|e| FirestoreError::AuthError(e.to_string()))
    }

    async fn api_error(response: reqwest::Response) -> FirestoreError {
        let status_code = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        FirestoreError::ApiError {
            status_code,
            message,
        }
    }

    /// Lists every document of the booking collection, following pagination.
    pub async fn list_documents(&self, namespace: &str) -> Result<Vec<Document>, FirestoreError> {
        let token = self.bearer_token().await?;
        let url = self.collection_url(namespace);

        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self
                .client
                .get(&url)
                .query(&[("pageSize", LIST_PAGE_SIZE.to_string())]);
            if let Some(page) = &page_token {
                request = request.query(&[("pageToken", page.as_str())]);
            }
            if let Some(bearer) = &token {
                request = request.bearer_auth(bearer);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(Self::api_error(response).await);
            }

            let page: ListDocumentsResponse = response.json().await?;
            documents.extend(page.documents.unwrap_or_default());
            match page.next_page_token {
                Some(next) if !next.is_empty() => page_token = Some(next),
                _ => break,
            }
        }

        debug!(
            "Listed {} booking documents in namespace {}",
            documents.len(),
            namespace
        );
        Ok(documents)
    }

    /// Runs an equality query on (date, time, room) over the collection.
    pub async fn query_documents(
        &self,
        namespace: &str,
        date: &str,
        time: &str,
        room: &str,
    ) -> Result<Vec<Document>, FirestoreError> {
        let token = self.bearer_token().await?;
        let url = format!("{}/{}:runQuery", self.base_url(), self.parent_path(namespace));

        let body = RunQueryRequest {
            structured_query: StructuredQuery {
                from: vec![CollectionSelector {
                    collection_id: self.config.collection.clone(),
                }],
                filter: Filter {
                    composite_filter: CompositeFilter {
                        op: "AND".to_string(),
                        filters: vec![
                            equality_clause("date", date),
                            equality_clause("time", time),
                            equality_clause("room", room),
                        ],
                    },
                },
                limit: 1,
            },
        };

        let mut request = self.client.post(&url).json(&body);
        if let Some(bearer) = &token {
            request = request.bearer_auth(bearer);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let items: Vec<RunQueryResponseItem> = response.json().await?;
        Ok(items.into_iter().filter_map(|item| item.document).collect())
    }

    /// Appends one document to the booking collection and returns it with
    /// the server-assigned resource name.
    pub async fn create_document(
        &self,
        namespace: &str,
        document: &Document,
    ) -> Result<Document, FirestoreError> {
        let token = self.bearer_token().await?;
        let url = self.collection_url(namespace);

        let mut request = self.client.post(&url).json(document);
        if let Some(bearer) = &token {
            request = request.bearer_auth(bearer);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let created: Document = response.json().await?;
        Ok(created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_map_to_the_shared_taxonomy() {
        let api = FirestoreError::ApiError {
            status_code: 403,
            message: "permission denied".to_string(),
        };
        assert_eq!(api.status_code(), 502);
        assert_eq!(RoomifyError::from(api).status_code(), 502);

        let malformed = FirestoreError::MalformedDocument("missing field".to_string());
        assert_eq!(malformed.status_code(), 500);
        assert_eq!(RoomifyError::from(malformed).status_code(), 400);

        let auth = FirestoreError::AuthError("no token".to_string());
        assert_eq!(RoomifyError::from(auth).status_code(), 500);
    }

    #[test]
    fn test_query_filters_serialize_with_the_wire_shape() {
        let clause = equality_clause("room", "Sala A");
        let json = serde_json::to_value(&clause).unwrap();

        assert_eq!(json["fieldFilter"]["field"]["fieldPath"], "room");
        assert_eq!(json["fieldFilter"]["op"], "EQUAL");
        assert_eq!(json["fieldFilter"]["value"]["stringValue"], "Sala A");
    }
}
