//! Subtitle selection endpoint.
//!
//! Candidates are supplied by the caller; storing them is somebody else's job.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use subtis_core::{LookupOutcome, SubtitleCandidate};
use tracing::info;

use super::filename::parse_error_response;
use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectSubtitleRequest {
    pub file_name: String,
    #[serde(default)]
    pub candidates: Vec<SubtitleCandidate>,
}

/// Parse the filename, then pick the best of the supplied candidates.
///
/// POST /api/v1/subtitles/select
pub async fn select_subtitle(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectSubtitleRequest>,
) -> Result<Json<LookupOutcome>, (StatusCode, Json<ErrorResponse>)> {
    let metadata = state
        .parser()
        .parse(&request.file_name)
        .map_err(|e| parse_error_response(&e))?;

    let selected = state
        .matcher()
        .select(&metadata, &request.candidates)
        .map_err(|e| {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new(e, "no_candidate")),
            )
        })?;

    info!(
        "Selected {} for {} via {} tier",
        selected.candidate.title_file_name, request.file_name, selected.tier
    );

    Ok(Json(LookupOutcome {
        metadata,
        candidate: selected.candidate,
        tier: selected.tier,
    }))
}
