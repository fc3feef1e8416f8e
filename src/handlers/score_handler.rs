use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::handlers::failure;
use crate::models::event::ScoreUpdateRequest;
use crate::services::ScoreboardService;

#[tracing::instrument(
    name = "Update score",
    skip(score_request, service),
    fields(
        event_id = %score_request.event_id,
        division = %score_request.division
    )
)]
pub async fn update_score(
    score_request: web::Json<ScoreUpdateRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.update_score(score_request.into_inner()).await {
        Ok(()) => Ok(HttpResponse::Ok().json(json!({ "success": true }))),
        Err(e) => Ok(failure("Update score", e)),
    }
}
