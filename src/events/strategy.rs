use crate::models::event::{
    EventCategory, EventSummary, FormField, FormStructure, PlayerRequirements, TableColumn,
};
use crate::models::matches::{AddMatchRequest, MatchRecord};
use crate::models::standings::{MatchStats, MedalTally};

pub type MedalPointsFn = fn(&MedalTally) -> i64;
pub type MatchStatsFn = fn(&[MatchRecord]) -> MatchStats;
pub type ScoreValidator = fn(&str, i64, i64, i64) -> Result<(), String>;
pub type MatchValidator = fn(&AddMatchRequest) -> Result<(), String>;

/// How an event turns a division's performance into statistics
#[derive(Debug, Clone, Copy)]
pub enum Scoring {
    /// Points from the division's medal tally in the event sheet
    MedalBased(MedalPointsFn),
    /// Tallies over the division's rows in the `Matches` sheet
    MatchBased(MatchStatsFn),
}

/// Everything event-specific. Optional capabilities are `None` when the
/// event has no behaviour of its own and callers fall back to defaults.
#[derive(Debug, Clone)]
pub struct EventStrategy {
    pub id: &'static str,
    pub name: &'static str,
    pub category: EventCategory,
    pub scoring: Scoring,
    pub rules: String,
    pub validate_score: ScoreValidator,
    pub validate_match: Option<MatchValidator>,
    pub table_structure: Option<fn() -> Vec<TableColumn>>,
    pub form_structure: Option<fn() -> FormStructure>,
    pub player_requirements: fn() -> PlayerRequirements,
}

impl EventStrategy {
    pub fn summary(&self) -> EventSummary {
        EventSummary {
            id: self.id.to_string(),
            name: self.name.to_string(),
            category: self.category,
        }
    }

    pub fn table_structure(&self) -> Option<Vec<TableColumn>> {
        self.table_structure.map(|columns| columns())
    }

    pub fn form_structure(&self) -> FormStructure {
        self.form_structure.map_or_else(default_form_structure, |form| form())
    }
}

/// Match-entry form used by events without one of their own
pub fn default_form_structure() -> FormStructure {
    FormStructure {
        form_type: "match".to_string(),
        fields: vec![
            FormField::new("team1", "Team 1", "select").required(),
            FormField::new("team2", "Team 2", "select").required(),
            FormField::new("result", "Result", "select")
                .with_options(&["win", "loss", "draw"])
                .required(),
            FormField::new("match_points", "Match Points", "number"),
            FormField::new("game_points", "Game Points", "number"),
        ],
    }
}

/// No squad constraints have been published yet
pub fn unspecified_player_requirements() -> PlayerRequirements {
    PlayerRequirements::default()
}
