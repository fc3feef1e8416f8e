use actix_web::{web, HttpResponse, Result};

use crate::handlers::failure;
use crate::models::standings::StandingsScope;
use crate::services::ScoreboardService;

/// Medal table for the whole tournament or one half of it
#[tracing::instrument(name = "Get standings", skip(service))]
pub async fn get_standings(
    scope: StandingsScope,
    service: web::Data<ScoreboardService>,
) -> Result<HttpResponse> {
    match service.standings(scope).await {
        Ok(standings) => {
            tracing::info!("Returning {} standings rows", standings.len());
            Ok(HttpResponse::Ok().json(standings))
        }
        Err(e) => Ok(failure("Get standings", e)),
    }
}
