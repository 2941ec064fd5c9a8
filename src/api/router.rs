//! Router setup and configuration.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::handlers::{health, history, password, settings};
use crate::api::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    // Health and metrics routes
    let health_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/metrics", get(health::metrics));

    let api_routes = Router::new()
        .route("/password", post(password::generate))
        .route("/strength", post(password::strength))
        .route(
            "/history",
            get(history::list).post(history::record).delete(history::clear),
        )
        .route("/settings", get(settings::get).put(settings::save));

    Router::new()
        .merge(health_routes)
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
