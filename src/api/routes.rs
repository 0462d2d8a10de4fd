//! API Routes
//!
//! Configures the Axum router with all key/value endpoints.

use axum::{
    http::Method,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_handler, delete_handler, get_handler, health_handler, method_not_allowed, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /add` - Store a key-value pair
/// - `GET /get?key=` - Retrieve a value by key
/// - `DELETE /delete?key=` - Delete a key
/// - `GET /stats` - Store fill level
/// - `GET /health` - Health check endpoint
///
/// Any other method on the three store routes is answered with 405 and an
/// `Allow` header before the store is touched.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/add",
            post(add_handler).fallback(|method: Method| method_not_allowed(method, "POST")),
        )
        .route(
            "/get",
            get(get_handler).fallback(|method: Method| method_not_allowed(method, "GET,HEAD")),
        )
        .route(
            "/delete",
            delete(delete_handler)
                .fallback(|method: Method| method_not_allowed(method, "DELETE")),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
