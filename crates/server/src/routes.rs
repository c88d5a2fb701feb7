use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use kwscout_core::engine;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Deserialize)]
pub struct ScrapeParams {
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub engine: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ScrapeResponse {
    pub keywords: Vec<String>,
}

pub async fn scrape_handler(
    State(state): State<AppState>,
    Query(params): Query<ScrapeParams>,
) -> Result<Json<ScrapeResponse>, AppError> {
    let query = params
        .query
        .as_deref()
        .filter(|q| !q.is_empty())
        .ok_or(AppError::MissingQuery)?;

    let source = state
        .registry
        .get(params.engine.as_deref())
        .map_err(|_| AppError::UnknownEngine)?;

    info!(engine = source.name(), query, "starting keyword scrape");

    let keywords = engine::expand(query, source.as_ref()).await;

    if keywords.is_empty() {
        return Err(AppError::NoKeywords);
    }

    info!(
        engine = source.name(),
        total = keywords.len(),
        "scrape completed"
    );

    Ok(Json(ScrapeResponse { keywords }))
}

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
