use std::net::TcpListener;
use std::sync::Arc;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde_json::Value;

use scoreboard_backend::run;
use scoreboard_backend::db::memory::InMemoryStore;
use scoreboard_backend::db::store::{Row, TabularStore};
use scoreboard_backend::events::EventRegistry;
use scoreboard_backend::services::ScoreboardService;
use scoreboard_backend::telemetry::{get_subscriber, init_subscriber};

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::stdout
        );
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(
            subscriber_name,
            default_filter_level,
            std::io::sink
        );
        init_subscriber(subscriber);
    }
});

pub struct TestApp {
    pub address: String,
    pub store: Arc<InMemoryStore>,
    pub client: Client,
}

impl TestApp {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(&format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn seed(&self, sheet: &str, rows: &[&[&str]]) {
        let rows: Vec<Row> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect();
        self.store
            .append_rows(sheet, rows)
            .await
            .expect("Failed to seed sheet.");
    }

    pub async fn rows(&self, sheet: &str) -> Vec<Row> {
        self.store.read_rows(sheet).await.expect("Failed to read sheet.")
    }
}

pub async fn spawn_app() -> TestApp {
    // The first time `initialize` is invoked the code in `TRACING` is executed.
    // All other invocations will instead skip execution.
    Lazy::force(&TRACING);

    let listener = TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    // Get port assigned by the OS
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store = Arc::new(InMemoryStore::with_standard_layout());
    let service = ScoreboardService::new(store.clone(), Arc::new(EventRegistry::tournament()));
    let server = run(listener, service, vec![])
        .expect("Failed to bind address");
    // Launch the server as a background task
    let _ = tokio::spawn(server);

    TestApp {
        address,
        store,
        client: Client::new(),
    }
}

pub fn body_error(json: &Value) -> &str {
    json["error"].as_str().expect("No error in response")
}
