use actix_web::{web, HttpResponse, Result};

use crate::handlers::failure;
use crate::models::matches::MatchesResponse;
use crate::models::event::RulesResponse;
use crate::services::ScoreboardService;

pub async fn list_events(service: web::Data<ScoreboardService>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(service.list_events()))
}

#[tracing::instrument(name = "Get event standings", skip(service))]
pub async fn get_event_standings(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.event_standings(&event_id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(failure("Get event standings", e)),
    }
}

#[tracing::instrument(name = "Get event matches", skip(service))]
pub async fn get_event_matches(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.event_matches(&event_id).await {
        Ok(matches) => {
            tracing::info!("Returning {} matches for {}", matches.len(), event_id);
            Ok(HttpResponse::Ok().json(MatchesResponse { matches }))
        }
        Err(e) => Ok(failure("Get event matches", e)),
    }
}

#[tracing::instrument(name = "Get event fixtures", skip(service))]
pub async fn get_event_fixtures(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.event_fixtures(&event_id).await {
        Ok(fixtures) => Ok(HttpResponse::Ok().json(fixtures)),
        Err(e) => Ok(failure("Get event fixtures", e)),
    }
}

pub async fn get_event_rules(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.rules(&event_id) {
        Ok(rules) => Ok(HttpResponse::Ok().json(RulesResponse { rules })),
        Err(e) => Ok(failure("Get event rules", e)),
    }
}

pub async fn get_form_structure(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.form_structure(&event_id) {
        Ok(form) => Ok(HttpResponse::Ok().json(form)),
        Err(e) => Ok(failure("Get form structure", e)),
    }
}

pub async fn get_player_requirements(
    event_id: String,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.player_requirements(&event_id) {
        Ok(requirements) => Ok(HttpResponse::Ok().json(requirements)),
        Err(e) => Ok(failure("Get player requirements", e)),
    }
}
