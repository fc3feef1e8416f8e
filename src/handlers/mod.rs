use actix_web::{HttpResponse, ResponseError};

use crate::error::ScoreboardError;

pub mod backend_health_handler;
pub mod event_handler;
pub mod fixture_handler;
pub mod match_handler;
pub mod score_handler;
pub mod standings_handler;

/// Log a failed operation and render it as `{"error": ...}`.
pub(crate) fn failure(operation: &str, error: ScoreboardError) -> HttpResponse {
    match &error {
        ScoreboardError::NotFound(_) | ScoreboardError::Validation(_) => {
            tracing::warn!("{} rejected: {}", operation, error);
        }
        ScoreboardError::Parse { .. } | ScoreboardError::Store(_) => {
            tracing::error!("{} failed: {}", operation, error);
        }
    }
    error.error_response()
}
