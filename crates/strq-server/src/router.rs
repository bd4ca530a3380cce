use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handler;
use crate::state::AppState;

/// Build the axum router with all StrQ endpoints.
///
/// CORS is permissive, matching the original service's open policy. The
/// static `filter-by-natural-language` segment takes precedence over the
/// `{value}` capture.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handler::home))
        .route("/v1/health", get(handler::health))
        .route(
            "/strings",
            post(handler::create_string).get(handler::list_strings),
        )
        .route(
            "/strings/filter-by-natural-language",
            get(handler::filter_by_natural_language),
        )
        .route(
            "/strings/:value",
            get(handler::get_string).delete(handler::delete_string),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
