use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Query parameter is required")]
    MissingQuery,

    #[error("Invalid or missing search engine. Use ?engine=google, ?engine=bing, or ?engine=yahoo")]
    UnknownEngine,

    #[error("No keywords found")]
    NoKeywords,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::MissingQuery | AppError::UnknownEngine => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": self.to_string() })),
            )
                .into_response(),
            AppError::NoKeywords => (
                StatusCode::NOT_FOUND,
                Json(json!({ "message": self.to_string() })),
            )
                .into_response(),
            AppError::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to scrape keywords",
                    "details": e.to_string(),
                })),
            )
                .into_response(),
        }
    }
}
