use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::selection::SelectionError;

pub const PUZZLE_NOT_FOUND: &str = "Puzzle not found";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),
}

impl AppError {
    pub fn puzzle_not_found() -> Self {
        AppError::NotFound(PUZZLE_NOT_FOUND.to_string())
    }
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        match e {
            SelectionError::NoMatches(_) => AppError::NotFound(e.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
