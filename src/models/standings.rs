use serde::{Deserialize, Serialize};

use crate::models::event::TableColumn;

/// Medal counts for one division. Counts are never negative.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct MedalTally {
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
}

impl MedalTally {
    pub fn new(gold: u32, silver: u32, bronze: u32) -> Self {
        Self { gold, silver, bronze }
    }

    /// Gold=3, Silver=2, Bronze=1
    pub fn default_points(&self) -> i64 {
        i64::from(self.gold) * 3 + i64::from(self.silver) * 2 + i64::from(self.bronze)
    }
}

/// One line of a medal table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct StandingEntry {
    pub division: String,
    pub gold: u32,
    pub silver: u32,
    pub bronze: u32,
    pub points: i64,
}

/// Tallies of a division's matches in a match-based event
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct MatchStats {
    pub played: u32,
    pub won: u32,
    pub lost: u32,
    pub drawn: u32,
    pub match_points: f64,
    pub game_points: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DivisionStats {
    pub division: String,
    #[serde(flatten)]
    pub stats: MatchStats,
}

/// Rows of an event table: medal lines or match tallies depending on the event
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum EventStandings {
    Matches(Vec<DivisionStats>),
    Medals(Vec<StandingEntry>),
}

impl EventStandings {
    pub fn len(&self) -> usize {
        match self {
            EventStandings::Matches(rows) => rows.len(),
            EventStandings::Medals(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EventStandingsResponse {
    pub standings: EventStandings,
    pub table_structure: Option<Vec<TableColumn>>,
}

/// Which medal table the overall standings endpoints read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandingsScope {
    Overall,
    Sports,
    Cultural,
}
