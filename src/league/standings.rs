use std::collections::HashMap;

use crate::db::store::Row;
use crate::error::ScoreboardError;
use crate::events::strategy::{MatchStatsFn, MedalPointsFn};
use crate::models::matches::MatchRecord;
use crate::models::standings::{DivisionStats, MedalTally, StandingEntry};

/// Division, Gold, Silver, Bronze
const MIN_FIELDS: usize = 4;

fn parse_medal(row_index: usize, column: &str, value: &str) -> Result<u32, ScoreboardError> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| ScoreboardError::Parse {
        row: row_index,
        message: format!("{} must be a non-negative integer, got '{}'", column, value),
    })
}

/// Turn medal-table rows into standing entries, in input order.
///
/// Rows with fewer than four cells are skipped. Empty medal cells count as
/// zero; anything else that is not a non-negative integer fails with the
/// 0-based index of the row. Points come from `points` when given, otherwise
/// from the default Gold=3/Silver=2/Bronze=1 weights.
pub fn aggregate(rows: &[Row], points: Option<MedalPointsFn>) -> Result<Vec<StandingEntry>, ScoreboardError> {
    let mut standings = Vec::with_capacity(rows.len());

    for (row_index, row) in rows.iter().enumerate() {
        if row.len() < MIN_FIELDS {
            continue;
        }

        let tally = MedalTally {
            gold: parse_medal(row_index, "gold", &row[1])?,
            silver: parse_medal(row_index, "silver", &row[2])?,
            bronze: parse_medal(row_index, "bronze", &row[3])?,
        };
        let points = match points {
            Some(points) => points(&tally),
            None => tally.default_points(),
        };

        standings.push(StandingEntry {
            division: row[0].clone(),
            gold: tally.gold,
            silver: tally.silver,
            bronze: tally.bronze,
            points,
        });
    }

    Ok(standings)
}

/// Split matches by team, teams in order of first appearance.
pub fn group_by_team(matches: &[MatchRecord]) -> Vec<(String, Vec<MatchRecord>)> {
    let mut groups: Vec<(String, Vec<MatchRecord>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for record in matches {
        match positions.get(record.team.as_str()) {
            Some(&position) => groups[position].1.push(record.clone()),
            None => {
                positions.insert(record.team.as_str(), groups.len());
                groups.push((record.team.clone(), vec![record.clone()]));
            }
        }
    }

    groups
}

/// Per-division statistics for a match-based event.
pub fn tabulate_matches(matches: &[MatchRecord], stats: MatchStatsFn) -> Vec<DivisionStats> {
    group_by_team(matches)
        .into_iter()
        .map(|(division, records)| DivisionStats {
            division,
            stats: stats(&records),
        })
        .collect()
}
