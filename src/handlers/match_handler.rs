use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::handlers::failure;
use crate::models::matches::AddMatchRequest;
use crate::services::ScoreboardService;

/// Record a match result and its mirror for the opponent
#[tracing::instrument(
    name = "Add match result",
    skip(match_request, service),
    fields(event_id = %match_request.event_id)
)]
pub async fn add_match(
    match_request: web::Json<AddMatchRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.add_match(match_request.into_inner()).await {
        Ok(recorded) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "match": recorded
        }))),
        Err(e) => Ok(failure("Add match result", e)),
    }
}
