//! Wiremock-backed tests for the Firestore booking store: request shapes,
//! response mapping and error surfacing, without touching the real API.

use roomify_common::models::NewBooking;
use roomify_common::services::BookingStore;
use roomify_config::FirestoreConfig;
use roomify_firestore::FirestoreBookingStore;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PARENT_PATH: &str =
    "/projects/roomify-test/databases/(default)/documents/artifacts/test-app/public/data";

fn test_config(base_url: &str) -> FirestoreConfig {
    FirestoreConfig {
        project_id: "roomify-test".to_string(),
        key_path: None,
        app_id: "test-app".to_string(),
        collection: "roomify_bookings".to_string(),
        base_url: Some(base_url.to_string()),
        poll_interval_secs: None,
    }
}

fn new_booking() -> NewBooking {
    NewBooking {
        user_name: "Ana".to_string(),
        date: "2024-06-01".to_string(),
        time: "09:00".to_string(),
        room: "Sala A".to_string(),
    }
}

fn stored_document(id: &str, user_name: &str, time: &str) -> serde_json::Value {
    json!({
        "name": format!(
            "projects/roomify-test/databases/(default)/documents/artifacts/test-app/public/data/roomify_bookings/{}",
            id
        ),
        "fields": {
            "userName": {"stringValue": user_name},
            "date": {"stringValue": "2024-06-01"},
            "time": {"stringValue": time},
            "room": {"stringValue": "Sala A"},
            "createdAt": {"stringValue": "2024-05-30T12:00:00+00:00"},
        },
        "createTime": "2024-05-30T12:00:01Z",
        "updateTime": "2024-05-30T12:00:01Z",
    })
}

#[tokio::test]
async fn test_create_booking_posts_one_document_and_maps_the_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}/roomify_bookings", PARENT_PATH)))
        .and(body_partial_json(json!({
            "fields": {
                "userName": {"stringValue": "Ana"},
                "date": {"stringValue": "2024-06-01"},
                "time": {"stringValue": "09:00"},
                "room": {"stringValue": "Sala A"},
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(stored_document(
            "abc123", "Ana", "09:00",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let booking = store
        .create_booking("test-app", new_booking())
        .await
        .unwrap();

    assert_eq!(booking.id, "abc123");
    assert_eq!(booking.user_name, "Ana");
    assert_eq!(booking.date, "2024-06-01");
    assert_eq!(booking.time, "09:00");
    assert_eq!(booking.room, "Sala A");
    assert_eq!(booking.created_at, "2024-05-30T12:00:00+00:00");
}

#[tokio::test]
async fn test_find_booking_runs_an_equality_query() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", PARENT_PATH)))
        .and(body_partial_json(json!({
            "structuredQuery": {
                "from": [{"collectionId": "roomify_bookings"}],
                "limit": 1,
            }
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"document": stored_document("abc123", "Ana", "09:00")}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let found = store
        .find_booking("test-app", "2024-06-01", "09:00", "Sala A")
        .await
        .unwrap();

    let booking = found.expect("the matching document must map to a booking");
    assert_eq!(booking.id, "abc123");
    assert_eq!(booking.time, "09:00");
}

#[tokio::test]
async fn test_find_booking_maps_empty_result_to_none() {
    let server = MockServer::start().await;

    // A query with no match streams back a single read-time-only element.
    Mock::given(method("POST"))
        .and(path(format!("{}:runQuery", PARENT_PATH)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"readTime": "2024-05-30T12:00:00Z"}])),
        )
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let found = store
        .find_booking("test-app", "2024-06-01", "09:00", "Sala A")
        .await
        .unwrap();

    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_bookings_follows_pagination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/roomify_bookings", PARENT_PATH)))
        .and(query_param("pageToken", "page-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [stored_document("b2", "Rui", "09:30")],
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("{}/roomify_bookings", PARENT_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [stored_document("b1", "Ana", "09:00")],
            "nextPageToken": "page-2",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let bookings = store.list_bookings("test-app").await.unwrap();

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, "b1");
    assert_eq!(bookings[1].id, "b2");
}

#[tokio::test]
async fn test_list_bookings_handles_an_empty_collection() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/roomify_bookings", PARENT_PATH)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let bookings = store.list_bookings("test-app").await.unwrap();

    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_api_errors_are_surfaced_with_their_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(format!("{}/roomify_bookings", PARENT_PATH)))
        .respond_with(ResponseTemplate::new(403).set_body_string("permission denied"))
        .mount(&server)
        .await;

    let store = FirestoreBookingStore::from_config(test_config(&server.uri()));
    let err = store.list_bookings("test-app").await.unwrap_err();

    let message = err.to_string();
    assert!(message.contains("403"), "unexpected error: {}", message);
    assert!(message.contains("permission denied"));
}
