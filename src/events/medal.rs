//! Medal-based events: most sports and every cultural event.

use crate::events::rules;
use crate::events::strategy::{unspecified_player_requirements, EventStrategy, Scoring};
use crate::models::event::EventCategory;
use crate::models::standings::MedalTally;

/// Event-specific point values have not been decided yet, so every
/// medal-based event scores zero until they are.
pub fn placeholder_points(_tally: &MedalTally) -> i64 {
    0
}

/// Largest count a medal cell can hold and still be read back
pub const MAX_MEDALS: i64 = u32::MAX as i64;

/// Medal counts must not be negative. All zeros is a valid score.
pub fn validate_medal_counts(_division: &str, gold: i64, silver: i64, bronze: i64) -> Result<(), String> {
    let counts = [gold, silver, bronze];
    if counts.iter().any(|&count| count < 0) {
        return Err("Medal counts cannot be negative".to_string());
    }
    if counts.iter().any(|&count| count > MAX_MEDALS) {
        return Err(format!("Medal counts cannot exceed {}", MAX_MEDALS));
    }
    Ok(())
}

pub fn strategy(id: &'static str, name: &'static str, category: EventCategory) -> EventStrategy {
    EventStrategy {
        id,
        name,
        category,
        scoring: Scoring::MedalBased(placeholder_points),
        rules: rules::placeholder(name),
        validate_score: validate_medal_counts,
        validate_match: None,
        table_structure: None,
        form_structure: None,
        player_requirements: unspecified_player_requirements,
    }
}
