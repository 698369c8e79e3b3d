use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::highlight::HighlightError;
use crate::queue::QueueError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Queue(#[from] QueueError),
    #[error(transparent)]
    Highlight(#[from] HighlightError),
    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Queue(QueueError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Queue(QueueError::AlreadyExists(_)) => StatusCode::CONFLICT,
            ApiError::Queue(QueueError::UnsupportedFile(_)) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ApiError::Queue(_) | ApiError::Highlight(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("❌ Request failed: {:#}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
