use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::{filename, handlers, middleware, release_groups, subtitles};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    // API routes
    let api_routes = Router::new()
        // Health and config
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        // Filename parsing
        .route("/filename/parse", post(filename::parse_filename))
        // Subtitle selection
        .route("/subtitles/select", post(subtitles::select_subtitle))
        // Release group registry (read-only)
        .route("/release-groups", get(release_groups::list_release_groups))
        .route("/release-groups/{name}", get(release_groups::get_release_group))
        .with_state(state);

    Router::new()
        .nest("/api/v1", api_routes)
        .route("/metrics", get(handlers::metrics))
        .route_layer(from_fn(middleware::metrics_middleware))
        .layer(TraceLayer::new_for_http())
}
