use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

use crate::db::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum ScoreboardError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    /// A stored row could not be read. `row` is the 0-based data-row index.
    #[error("Invalid value in row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("{0}")]
    Store(#[from] StoreError),
}

impl ScoreboardError {
    pub fn event_not_found() -> Self {
        ScoreboardError::NotFound("Event not found".to_string())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ScoreboardError::Validation(message.into())
    }
}

impl ResponseError for ScoreboardError {
    fn status_code(&self) -> StatusCode {
        match self {
            ScoreboardError::NotFound(_) => StatusCode::NOT_FOUND,
            ScoreboardError::Validation(_) => StatusCode::BAD_REQUEST,
            ScoreboardError::Parse { .. } | ScoreboardError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}
