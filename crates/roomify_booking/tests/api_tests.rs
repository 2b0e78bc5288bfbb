//! Integration tests for the booking HTTP surface, backed by the in-memory
//! store so the router can be exercised end to end.

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;


async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn book_request(user_name: &str, date: &str, time: &str, room: &str) -> Request<Body> {
    let payload = serde_json::json!({
        "userName": user_name,
        "date": date,
        "time": time,
        "room": room,
    });
    Request::builder()
        .uri("/book")
        .method("POST")
        .header("Content-Type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_slots_endpoint_returns_catalog_and_rooms() {
    let (router, _store) = fixtures::create_test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/slots")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["slots"].as_array().unwrap().len(), 21);
    assert_eq!(body["slots"][0], "08:00");
    assert_eq!(body["slots"][20], "18:00");
    assert_eq!(body["rooms"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_availability_reports_free_grid_for_fresh_store() {
    let (router, _store) = fixtures::create_test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/availability?date=2024-06-01&room=Sala%20A")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 21);
    assert!(slots.iter().all(|slot| slot["booked"] == false));
}

#[tokio::test]
async fn test_availability_requires_date_and_room() {
    let (router, _store) = fixtures::create_test_router();

    let response = router
        .oneshot(
            Request::builder()
                .uri("/availability?date=&room=Sala%20A")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_book_endpoint_creates_then_conflicts() {
    let (router, _store) = fixtures::create_test_router();

    let response = router
        .clone()
        .oneshot(book_request("Ana", "2024-06-01", "09:00", "Sala A"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["booking"]["userName"], "Ana");
    assert_eq!(body["booking"]["time"], "09:00");
    assert!(!body["booking"]["id"].as_str().unwrap().is_empty());

    // Same triple, different user: rejected without a second write.
    let response = router
        .clone()
        .oneshot(book_request("Rui", "2024-06-01", "09:00", "Sala A"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    // The adjacent slot still books fine.
    let response = router
        .oneshot(book_request("Rui", "2024-06-01", "09:30", "Sala A"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_book_endpoint_rejects_empty_user_name() {
    let (router, store) = fixtures::create_test_router();

    let response = router
        .oneshot(book_request("   ", "2024-06-01", "09:00", "Sala A"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bookings = store.list_bookings("test-app").await.unwrap();
    assert!(bookings.is_empty());
}

#[tokio::test]
async fn test_bookings_endpoint_serves_feed_snapshot() {
    let (router, _store) = fixtures::create_test_router();

    let response = router
        .clone()
        .oneshot(book_request("Ana", "2024-06-01", "11:00", "Sala A"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // The feed polls once per second in the test config; give it one cycle.
    tokio::time::sleep(std::time::Duration::from_millis(1500)).await;

    let response = router
        .oneshot(
            Request::builder()
                .uri("/bookings")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["userName"], "Ana");
    assert_eq!(bookings[0]["room"], "Sala A");
}
