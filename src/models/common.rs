use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Outcome of one match from one side's perspective
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchResult {
    Win,
    Loss,
    Draw,
}

impl MatchResult {
    /// Get the inverse result (from opponent's perspective)
    pub fn inverse(&self) -> Self {
        match self {
            MatchResult::Win => MatchResult::Loss,
            MatchResult::Loss => MatchResult::Win,
            MatchResult::Draw => MatchResult::Draw,
        }
    }

    /// Parse the value stored in a sheet cell. Unknown values are `None`.
    pub fn from_cell(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "win" => Some(MatchResult::Win),
            "loss" => Some(MatchResult::Loss),
            "draw" => Some(MatchResult::Draw),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchResult::Win => "win",
            MatchResult::Loss => "loss",
            MatchResult::Draw => "draw",
        }
    }

    /// Match points awarded for this result (2/1/0)
    pub fn match_points(&self) -> f64 {
        match self {
            MatchResult::Win => 2.0,
            MatchResult::Draw => 1.0,
            MatchResult::Loss => 0.0,
        }
    }

    /// Game points assumed when none were reported
    pub fn default_game_points(&self) -> f64 {
        match self {
            MatchResult::Win => 1.0,
            MatchResult::Draw => 0.5,
            MatchResult::Loss => 0.0,
        }
    }
}

impl Display for MatchResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
