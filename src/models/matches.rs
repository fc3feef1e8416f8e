use serde::{Deserialize, Serialize};

use crate::models::common::MatchResult;

/// One side of a played match, as stored in the `Matches` sheet.
///
/// `result` is kept verbatim so rows with unexpected values still show up.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct MatchRecord {
    pub event_id: String,
    pub team: String,
    pub opponent: String,
    pub result: String,
    pub match_points: Option<f64>,
    pub game_points: Option<f64>,
    pub date: String,
    pub round: Option<u32>,
}

impl MatchRecord {
    pub fn outcome(&self) -> Option<MatchResult> {
        MatchResult::from_cell(&self.result)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AddMatchRequest {
    #[serde(rename = "eventId", default)]
    pub event_id: String,
    #[serde(default)]
    pub team1: String,
    #[serde(default)]
    pub team2: String,
    #[serde(default)]
    pub result: String,
    #[serde(default)]
    pub match_points: Option<f64>,
    #[serde(default)]
    pub game_points: Option<f64>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub round: Option<u32>,
}

/// The pair written for one reported match: the reporting side and its mirror
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RecordedMatch {
    pub record: MatchRecord,
    pub mirrored: MatchRecord,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchesResponse {
    pub matches: Vec<MatchRecord>,
}
