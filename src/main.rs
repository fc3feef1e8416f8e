use std::net::TcpListener;
use std::sync::Arc;

use scoreboard_backend::run;
use scoreboard_backend::config::settings::get_config;
use scoreboard_backend::db::build_store;
use scoreboard_backend::events::EventRegistry;
use scoreboard_backend::services::ScoreboardService;
use scoreboard_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "scoreboard-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout
    );
    init_subscriber(subscriber);

    let store = match build_store(&config.store) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!("❌ Failed to set up the tabular store: {}", e);
            std::process::exit(1);
        }
    };

    let registry = Arc::new(EventRegistry::tournament());
    tracing::info!("✅ Registered {} events", registry.len());

    let address = config.application.address();
    let listener = TcpListener::bind(&address)?;
    tracing::info!("Listening on {}", address);

    run(
        listener,
        ScoreboardService::new(store, registry),
        config.application.allowed_origins.clone(),
    )?.await
}
