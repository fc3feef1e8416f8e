use actix_web::{web, HttpResponse, Result};
use serde_json::json;

use crate::handlers::failure;
use crate::models::fixture::{AddFixtureRequest, UpdateFixtureRequest};
use crate::services::ScoreboardService;

#[tracing::instrument(
    name = "Add fixture",
    skip(fixture_request, service),
    fields(event_id = %fixture_request.event_id)
)]
pub async fn add_fixture(
    fixture_request: web::Json<AddFixtureRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.add_fixture(fixture_request.into_inner()).await {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "fixture": fixture
        }))),
        Err(e) => Ok(failure("Add fixture", e)),
    }
}

#[tracing::instrument(
    name = "Update fixture",
    skip(fixture_request, service),
    fields(fixture_id = %fixture_request.id)
)]
pub async fn update_fixture(
    fixture_request: web::Json<UpdateFixtureRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.update_fixture(fixture_request.into_inner()).await {
        Ok(fixture) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "fixture": fixture
        }))),
        Err(e) => Ok(failure("Update fixture", e)),
    }
}
