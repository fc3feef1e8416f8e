use serde::{Deserialize, Serialize};

pub const STATUS_SCHEDULED: &str = "scheduled";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    /// `{eventId}-{row}`, row being the fixture's data-row index in the sheet
    pub id: String,
    pub event_id: String,
    pub division1: String,
    pub division2: String,
    pub date: String,
    pub time: String,
    pub venue: String,
    pub status: String,
    pub winner: Option<String>,
    pub score: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddFixtureRequest {
    #[serde(default)]
    pub event_id: String,
    #[serde(default)]
    pub division1: String,
    #[serde(default)]
    pub division2: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub venue: String,
}

/// Only the fields present are written
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFixtureRequest {
    #[serde(default)]
    pub id: String,
    pub status: Option<String>,
    pub winner: Option<String>,
    pub score: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub venue: Option<String>,
}

impl Fixture {
    pub fn make_id(event_id: &str, row: usize) -> String {
        format!("{}-{}", event_id, row)
    }

    /// Splits `{eventId}-{row}`. Event ids contain dashes, the row never does.
    pub fn parse_id(id: &str) -> Option<(&str, usize)> {
        let (event_id, row) = id.rsplit_once('-')?;
        if event_id.is_empty() {
            return None;
        }
        Some((event_id, row.parse().ok()?))
    }
}
