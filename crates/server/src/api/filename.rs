//! Filename parsing endpoint.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use std::sync::Arc;
use subtis_core::{ParseError, TitleFileNameMetadata};

use super::handlers::ErrorResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ParseFilenameRequest {
    pub file_name: String,
}

/// Map a parse failure to its HTTP status and error body.
pub fn parse_error_response(err: &ParseError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match err {
        ParseError::UnsupportedExtension => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ParseError::NoYearFound | ParseError::UnknownRipType { .. } => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
    };
    (status, Json(ErrorResponse::new(err, err.reason())))
}

/// Parse a release filename into its metadata.
///
/// POST /api/v1/filename/parse
pub async fn parse_filename(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ParseFilenameRequest>,
) -> Result<Json<TitleFileNameMetadata>, (StatusCode, Json<ErrorResponse>)> {
    state
        .parser()
        .parse(&request.file_name)
        .map(Json)
        .map_err(|e| parse_error_response(&e))
}
