use serde::Deserialize;
use secrecy::SecretString;

/// Which tabular store backs the scoreboard.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StoreBackend {
    InMemory,
    GoogleSheets,
}

#[derive(Debug, Deserialize)]
pub struct StoreSettings {
    pub backend: StoreBackend,
    #[serde(default)]
    pub spreadsheet_id: Option<String>,
    #[serde(default)]
    pub access_token: Option<SecretString>,
    pub api_base_url: String,
}
