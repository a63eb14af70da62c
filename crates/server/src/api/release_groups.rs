use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use subtis_core::ReleaseGroup;

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReleaseGroupListResponse {
    pub release_groups: Vec<ReleaseGroup>,
    pub total: usize,
}

/// List the registry in declaration order.
///
/// GET /api/v1/release-groups
pub async fn list_release_groups(
    State(state): State<Arc<AppState>>,
) -> Json<ReleaseGroupListResponse> {
    let release_groups: Vec<_> = state.registry().iter().cloned().collect();
    let total = release_groups.len();
    Json(ReleaseGroupListResponse {
        release_groups,
        total,
    })
}

/// GET /api/v1/release-groups/{name}
pub async fn get_release_group(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<ReleaseGroup>, (StatusCode, Json<ErrorResponse>)> {
    state.registry().get(&name).cloned().map(Json).ok_or_else(|| {
        (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::new(
                format!("Release group not found: {}", name),
                "not_found",
            )),
        )
    })
}
