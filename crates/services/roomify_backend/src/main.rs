// File: services/roomify_backend/src/main.rs
use axum::{extract::State, routing::get, Json, Router};
use roomify_agenda::routes as agenda_routes;
use roomify_booking::routes as booking_routes;
use roomify_common::services::ServiceFactory;
use roomify_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::services::ServeDir;

mod app_state;
mod service_factory;

use app_state::AppState;
use service_factory::RoomifyServiceFactory;

#[axum::debug_handler]
async fn status_handler(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "namespace": state
            .config
            .firestore
            .as_ref()
            .map(|firestore| firestore.app_id.clone()),
        "booking_store": state.service_factory.booking_store().is_some(),
        "agenda": state.service_factory.agenda_generator().is_some(),
    }))
}

#[tokio::main]
async fn main() {
    roomify_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let service_factory = Arc::new(RoomifyServiceFactory::new(config.clone()));
    let store = service_factory
        .booking_store()
        .expect("a booking store is always configured");

    let state = AppState {
        config: config.clone(),
        service_factory,
    };

    let api_router = Router::new()
        .route("/", get(|| async { "Welcome to the Roomify API!" }))
        .route("/status", get(status_handler))
        .with_state(state);

    let booking_router = booking_routes(config.clone(), store);
    let agenda_router = agenda_routes(config.clone());

    let api_router =
        Router::new().nest("/api", api_router.merge(booking_router).merge(agenda_router));

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use roomify_agenda::doc::AgendaApiDoc;
        use roomify_booking::doc::BookingApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the Merged OpenAPI Documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Roomify API",
                version = "0.1.0",
                description = "Roomify booking service API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Roomify", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingApiDoc::openapi());
        openapi_doc.merge(AgendaApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    // Serve the static frontend in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ./dist");
        app = app.fallback_service(ServeDir::new("dist"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.unwrap();
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .unwrap();
}
