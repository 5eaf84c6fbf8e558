use crate::aggregate::{Summary, analyze_file};
use crate::conf::RuntimeConfig;
use crate::limit::parse_limit;
use crate::server::error::ApiError;
use crate::server::resolve::resolve_log_path;
use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub config: Arc<RuntimeConfig>,
}

/// Raw query parameters; `limit` stays a string so a bad value gets our own error body.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct AnalyzeParams {
    file: Option<String>,
    limit: Option<String>,
}

pub(crate) async fn handle_analyze(
    State(state): State<AppState>,
    Query(params): Query<AnalyzeParams>,
) -> Result<Json<Summary>, ApiError> {
    let file = params
        .file
        .filter(|f| !f.is_empty())
        .ok_or(ApiError::MissingFile)?;

    let limit = match params.limit.as_deref() {
        Some(raw) => Some(parse_limit(raw)?),
        None => state.config.default_limit,
    };

    let path = resolve_log_path(&state.config.log_root, &file)
        .map_err(|e| ApiError::from_resolve(e, &file))?;

    // Aggregation does blocking file reads.
    let summary = tokio::task::spawn_blocking(move || analyze_file(&path, limit))
        .await?
        .map_err(|e| ApiError::from_analyze(e, &file))?;

    info!(
        file = %file,
        limit = ?limit,
        views = summary.view_count,
        "analyzed log file"
    );
    Ok(Json(summary))
}

pub(crate) async fn handle_healthy() -> &'static str {
    "OK"
}
