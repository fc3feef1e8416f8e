//! Chess is scored per match: 2/1/0 match points and fractional game points.

use crate::events::rules;
use crate::events::strategy::{unspecified_player_requirements, EventStrategy, Scoring};
use crate::events::medal::validate_medal_counts;
use crate::models::common::MatchResult;
use crate::models::event::{EventCategory, TableColumn};
use crate::models::matches::{AddMatchRequest, MatchRecord};
use crate::models::standings::MatchStats;

pub const ID: &str = "chess";

/// Tally a division's matches.
///
/// Rows with an unrecognised result still count as played but add nothing else.
pub fn compute_stats(matches: &[MatchRecord]) -> MatchStats {
    let mut stats = MatchStats::default();
    for record in matches {
        stats.played += 1;
        let Some(result) = record.outcome() else {
            continue;
        };
        match result {
            MatchResult::Win => stats.won += 1,
            MatchResult::Draw => stats.drawn += 1,
            MatchResult::Loss => stats.lost += 1,
        }
        stats.match_points += result.match_points();
        stats.game_points += record.game_points.unwrap_or_else(|| result.default_game_points());
    }
    stats
}

pub fn table_structure() -> Vec<TableColumn> {
    vec![
        TableColumn::new("division", "Division", "text"),
        TableColumn::new("played", "Played", "number"),
        TableColumn::new("won", "Won", "number"),
        TableColumn::new("drawn", "Drawn", "number"),
        TableColumn::new("lost", "Lost", "number"),
        TableColumn::new("match_points", "Match Points", "number"),
        TableColumn::new("game_points", "Game Points", "number"),
    ]
}

/// A game is worth one point in total, so a side's share lies in [0, 1]
/// and reported match points must follow the 2/1/0 scheme.
pub fn validate_match(request: &AddMatchRequest) -> Result<(), String> {
    if request.team1 == request.team2 {
        return Err("Team 1 and Team 2 must be different".to_string());
    }
    let result = MatchResult::from_cell(&request.result)
        .ok_or_else(|| format!("Invalid result '{}'", request.result))?;

    if let Some(game_points) = request.game_points {
        if !(0.0..=1.0).contains(&game_points) {
            return Err(format!("Game points must be between 0 and 1, got {}", game_points));
        }
        if result == MatchResult::Draw && game_points != 0.5 {
            return Err("A drawn game is worth 0.5 game points".to_string());
        }
    }
    if let Some(match_points) = request.match_points {
        if match_points != result.match_points() {
            return Err(format!(
                "A {} is worth {} match points, got {}",
                result,
                result.match_points(),
                match_points
            ));
        }
    }
    Ok(())
}

pub fn strategy() -> EventStrategy {
    EventStrategy {
        id: ID,
        name: "Chess",
        category: EventCategory::Sports,
        scoring: Scoring::MatchBased(compute_stats),
        rules: rules::CHESS.to_string(),
        validate_score: validate_medal_counts,
        validate_match: Some(validate_match),
        table_structure: Some(table_structure),
        form_structure: None,
        player_requirements: unspecified_player_requirements,
    }
}
