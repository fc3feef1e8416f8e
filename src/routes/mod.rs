use actix_web::{error, web, HttpResponse};
use serde_json::json;

pub mod backend_health;
pub mod event;
pub mod results;
pub mod standings;

/// Malformed bodies get the same `{"error": ...}` shape as every other failure
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        tracing::warn!("Rejected request body: {}", message);
        error::InternalError::from_response(
            err,
            HttpResponse::BadRequest().json(json!({ "error": message })),
        )
        .into()
    })
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(standings::get_overall_standings)
            .service(standings::get_sports_standings)
            .service(standings::get_cultural_standings)
            .service(event::list_events)
            .service(event::get_event_standings)
            .service(event::get_event_matches)
            .service(event::get_event_fixtures)
            .service(event::get_event_rules)
            .service(event::get_form_structure)
            .service(event::get_player_requirements)
            .service(results::add_match)
            .service(results::update_score)
            .service(results::add_fixture)
            .service(results::update_fixture)
    );
}
