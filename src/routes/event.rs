// src/routes/event.rs
use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::event_handler;
use crate::services::ScoreboardService;

/// Every event in the tournament catalog
#[get("/events")]
async fn list_events(
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::list_events(service).await
}

/// Standings of one event, with the columns to render them
#[get("/event/{event_id}/standings")]
async fn get_event_standings(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_event_standings(path.into_inner(), service).await
}

#[get("/event/{event_id}/matches")]
async fn get_event_matches(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_event_matches(path.into_inner(), service).await
}

#[get("/event/{event_id}/fixtures")]
async fn get_event_fixtures(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_event_fixtures(path.into_inner(), service).await
}

#[get("/event/{event_id}/rules")]
async fn get_event_rules(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_event_rules(path.into_inner(), service).await
}

/// Fields of the result-entry form for an event
#[get("/event/{event_id}/form-structure")]
async fn get_form_structure(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_form_structure(path.into_inner(), service).await
}

#[get("/event/{event_id}/player-requirements")]
async fn get_player_requirements(
    path: web::Path<String>,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    event_handler::get_player_requirements(path.into_inner(), service).await
}
