// src/routes/results.rs
use actix_web::{post, web, HttpResponse, Result};

use crate::handlers::{fixture_handler, match_handler, score_handler};
use crate::models::event::ScoreUpdateRequest;
use crate::models::fixture::{AddFixtureRequest, UpdateFixtureRequest};
use crate::models::matches::AddMatchRequest;
use crate::services::ScoreboardService;

/// Record a match result (stored twice, once per side)
#[post("/match/add")]
async fn add_match(
    match_request: web::Json<AddMatchRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match_handler::add_match(match_request, service).await
}

/// Set a division's medals in an event
#[post("/score/update")]
async fn update_score(
    score_request: web::Json<ScoreUpdateRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    score_handler::update_score(score_request, service).await
}

#[post("/fixture/add")]
async fn add_fixture(
    fixture_request: web::Json<AddFixtureRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    fixture_handler::add_fixture(fixture_request, service).await
}

#[post("/fixture/update")]
async fn update_fixture(
    fixture_request: web::Json<UpdateFixtureRequest>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    fixture_handler::update_fixture(fixture_request, service).await
}
