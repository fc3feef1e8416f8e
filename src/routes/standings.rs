// src/routes/standings.rs
use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::standings_handler;
use crate::models::standings::StandingsScope;
use crate::services::ScoreboardService;

/// Overall medal table
#[get("/standings")]
async fn get_overall_standings(
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    standings_handler::get_standings(StandingsScope::Overall, service).await
}

/// Sports-only medal table
#[get("/standings/sports")]
async fn get_sports_standings(
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    standings_handler::get_standings(StandingsScope::Sports, service).await
}

/// Cultural-only medal table
#[get("/standings/cultural")]
async fn get_cultural_standings(
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    standings_handler::get_standings(StandingsScope::Cultural, service).await
}
