use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use tracing::info;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::models::{Analysis, MetadataRecord, ScoreResult};
use crate::state::AppState;
use crate::{extract, scoring, urls};

// ── Request body ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Validate)]
pub struct MetadataRequest {
    /// Bare hosts like `github.com` are accepted and get `https://` prepended.
    /// An absent key and an explicit `null` are both treated as missing.
    #[serde(default)]
    #[validate(
        required(message = "URL is required"),
        length(min = 1, message = "URL is required")
    )]
    pub url: Option<String>,
}

fn validation_error(e: validator::ValidationErrors) -> AppError {
    AppError::Validation(
        e.field_errors()
            .values()
            .flat_map(|v| v.iter())
            .filter_map(|e| e.message.as_ref())
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(", "),
    )
}

fn body_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection, "Rejected request body");
    AppError::Validation("Invalid request body".into())
}

/// Validate the request, fetch the page and extract its metadata.
async fn load_metadata(state: &AppState, req: MetadataRequest) -> AppResult<MetadataRecord> {
    req.validate().map_err(validation_error)?;
    let url = urls::prepare_url(req.url.as_deref().unwrap_or_default())?;

    info!(url = %url, "Fetching page metadata");
    let html = state.fetcher.fetch(&url).await?;

    Ok(extract::extract(&html, &url))
}

// ── Handlers ───────────────────────────────────────────────────────────────

/// POST /api/metadata
///
/// Returns the extracted metadata for `{ "url": ... }`.
pub async fn get_metadata(
    State(state): State<AppState>,
    payload: Result<Json<MetadataRequest>, JsonRejection>,
) -> AppResult<Json<MetadataRecord>> {
    let Json(req) = payload.map_err(body_error)?;
    let metadata = load_metadata(&state, req).await?;
    Ok(Json(metadata))
}

/// POST /api/analyze
///
/// Same input as `/api/metadata`; returns the metadata together with its scores.
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<MetadataRequest>, JsonRejection>,
) -> AppResult<Json<Analysis>> {
    let Json(req) = payload.map_err(body_error)?;
    let metadata = load_metadata(&state, req).await?;
    let scores = scoring::score(&metadata);

    info!(url = %metadata.url, overall = scores.overall, "Analyzed page");
    Ok(Json(Analysis { metadata, scores }))
}

/// POST /api/score
///
/// Scores a metadata record the caller already has. No network access.
pub async fn score_metadata(
    payload: Result<Json<MetadataRecord>, JsonRejection>,
) -> AppResult<Json<ScoreResult>> {
    let Json(record) = payload.map_err(body_error)?;
    Ok(Json(scoring::score(&record)))
}
