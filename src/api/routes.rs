//! API Routes
//!
//! Configures the Axum router with all sidecar endpoints.

use axum::{
    routing::{delete, get, put},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    close_session_handler, get_handler, health_handler, invalidate_all_handler,
    invalidate_handler, list_sessions_handler, open_session_handler, set_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin, the client UI calls from the browser
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_handler))
        .route("/sessions", get(list_sessions_handler))
        .route(
            "/sessions/:session",
            put(open_session_handler).delete(close_session_handler),
        )
        .route("/sessions/:session/cache", delete(invalidate_all_handler))
        .route(
            "/sessions/:session/cache/:key",
            get(get_handler).put(set_handler).delete(invalidate_handler),
        )
        .route("/sessions/:session/stats", get(stats_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
