//! Column layout of the tournament workbook and the row codecs for it.

use crate::db::store::Row;
use crate::error::ScoreboardError;
use crate::models::fixture::{AddFixtureRequest, Fixture, STATUS_SCHEDULED};
use crate::models::matches::MatchRecord;

pub const OVERALL_SHEET: &str = "Overall";
pub const SPORTS_SHEET: &str = "Sports";
pub const CULTURAL_SHEET: &str = "Cultural";
pub const FIXTURES_SHEET: &str = "Fixtures";
pub const MATCHES_SHEET: &str = "Matches";

pub const STANDINGS_HEADER: [&str; 5] = ["Division", "Gold", "Silver", "Bronze", "Points"];
pub const FIXTURES_HEADER: [&str; 9] = ["Event", "Div1", "Div2", "Date", "Time", "Venue", "Status", "Winner", "Score"];
pub const MATCHES_HEADER: [&str; 8] = ["Event", "Team", "Opponent", "Result", "MatchPoints", "GamePoints", "Date", "Round"];

/// Medal columns of a standings sheet (Gold..Bronze)
pub const MEDAL_COLUMNS: usize = 1;

pub mod fixture_columns {
    pub const DATE: usize = 3;
    pub const STATUS: usize = 6;
}

fn cell(row: &Row, index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

fn optional_cell(row: &Row, index: usize) -> Option<String> {
    row.get(index).filter(|c| !c.is_empty()).cloned()
}

/// Empty cells are `None`; anything else must parse.
pub fn parse_optional<T: std::str::FromStr>(
    row_index: usize,
    column: &str,
    value: &str,
) -> Result<Option<T>, ScoreboardError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    value.parse().map(Some).map_err(|_| ScoreboardError::Parse {
        row: row_index,
        message: format!("{} is not a number: '{}'", column, value),
    })
}

pub fn format_number(value: f64) -> String {
    format!("{}", value)
}

pub fn match_row(record: &MatchRecord) -> Row {
    vec![
        record.event_id.clone(),
        record.team.clone(),
        record.opponent.clone(),
        record.result.clone(),
        record.match_points.map(format_number).unwrap_or_default(),
        record.game_points.map(format_number).unwrap_or_default(),
        record.date.clone(),
        record.round.map(|r| r.to_string()).unwrap_or_default(),
    ]
}

/// Rows without an event or team are not matches and yield `None`.
pub fn parse_match_row(row_index: usize, row: &Row) -> Result<Option<MatchRecord>, ScoreboardError> {
    if cell(row, 0).is_empty() || cell(row, 1).is_empty() {
        return Ok(None);
    }
    Ok(Some(MatchRecord {
        event_id: cell(row, 0).to_string(),
        team: cell(row, 1).to_string(),
        opponent: cell(row, 2).to_string(),
        result: cell(row, 3).to_string(),
        match_points: parse_optional(row_index, "MatchPoints", cell(row, 4))?,
        game_points: parse_optional(row_index, "GamePoints", cell(row, 5))?,
        date: cell(row, 6).to_string(),
        round: parse_optional(row_index, "Round", cell(row, 7))?,
    }))
}

pub fn new_fixture_row(request: &AddFixtureRequest) -> Row {
    vec![
        request.event_id.clone(),
        request.division1.clone(),
        request.division2.clone(),
        request.date.clone(),
        request.time.clone(),
        request.venue.clone(),
        STATUS_SCHEDULED.to_string(),
        String::new(),
        String::new(),
    ]
}

pub fn parse_fixture_row(row_index: usize, row: &Row) -> Fixture {
    let event_id = cell(row, 0);
    Fixture {
        id: Fixture::make_id(event_id, row_index),
        event_id: event_id.to_string(),
        division1: cell(row, 1).to_string(),
        division2: cell(row, 2).to_string(),
        date: cell(row, fixture_columns::DATE).to_string(),
        time: cell(row, 4).to_string(),
        venue: cell(row, 5).to_string(),
        status: optional_cell(row, fixture_columns::STATUS).unwrap_or_else(|| STATUS_SCHEDULED.to_string()),
        winner: optional_cell(row, 7),
        score: optional_cell(row, 8),
    }
}

/// The Date..Score cells of a fixture row, in sheet order
pub fn fixture_tail(fixture: &Fixture) -> Row {
    vec![
        fixture.date.clone(),
        fixture.time.clone(),
        fixture.venue.clone(),
        fixture.status.clone(),
        fixture.winner.clone().unwrap_or_default(),
        fixture.score.clone().unwrap_or_default(),
    ]
}
