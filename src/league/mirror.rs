use crate::error::ScoreboardError;
use crate::models::common::MatchResult;
use crate::models::matches::MatchRecord;

/// The opposing side's view of one reported outcome
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MirroredOutcome {
    pub result: MatchResult,
    pub match_points: f64,
    pub game_points: f64,
}

/// Derive the opponent's result and points.
///
/// Match points follow the 2/1/0 scheme of the opposite result. Game points
/// are a share of a single game and never negative: a draw keeps the same
/// share, otherwise the opponent receives `1 - game_points`. For wins and
/// losses `game_points` must therefore lie in [0, 1]; anything else is
/// rejected rather than mirrored into a negative or inflated share.
pub fn mirror(result: MatchResult, match_points: f64, game_points: f64) -> Result<MirroredOutcome, ScoreboardError> {
    if !match_points.is_finite() || match_points < 0.0 {
        return Err(ScoreboardError::validation(format!(
            "Match points must be a non-negative number, got {}",
            match_points
        )));
    }

    if !game_points.is_finite() || game_points < 0.0 {
        return Err(ScoreboardError::validation(format!(
            "Game points must be a non-negative number, got {}",
            game_points
        )));
    }

    let opposite = result.inverse();
    let mirrored_game_points = match result {
        MatchResult::Draw => game_points,
        MatchResult::Win | MatchResult::Loss => {
            if !(0.0..=1.0).contains(&game_points) {
                return Err(ScoreboardError::validation(format!(
                    "Game points must be between 0 and 1 to mirror a {}, got {}",
                    result, game_points
                )));
            }
            1.0 - game_points
        }
    };

    Ok(MirroredOutcome {
        result: opposite,
        match_points: opposite.match_points(),
        game_points: mirrored_game_points,
    })
}

/// The record the opponent gets for `record`: same event, date and round.
pub fn mirror_record(record: &MatchRecord, result: MatchResult) -> Result<MatchRecord, ScoreboardError> {
    let match_points = record.match_points.unwrap_or_else(|| result.match_points());
    let game_points = record.game_points.unwrap_or_else(|| result.default_game_points());
    let outcome = mirror(result, match_points, game_points)?;

    Ok(MatchRecord {
        event_id: record.event_id.clone(),
        team: record.opponent.clone(),
        opponent: record.team.clone(),
        result: outcome.result.as_str().to_string(),
        match_points: Some(outcome.match_points),
        game_points: Some(outcome.game_points),
        date: record.date.clone(),
        round: record.round,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mirror_win() {
        let outcome = mirror(MatchResult::Win, 2.0, 1.0).unwrap();
        assert_eq!(outcome, MirroredOutcome { result: MatchResult::Loss, match_points: 0.0, game_points: 0.0 });
    }

    #[test]
    fn test_mirror_loss_and_draw() {
        let outcome = mirror(MatchResult::Loss, 0.0, 0.25).unwrap();
        assert_eq!(outcome.result, MatchResult::Win);
        assert_eq!(outcome.match_points, 2.0);
        assert_eq!(outcome.game_points, 0.75);

        let outcome = mirror(MatchResult::Draw, 1.0, 0.5).unwrap();
        assert_eq!(outcome, MirroredOutcome { result: MatchResult::Draw, match_points: 1.0, game_points: 0.5 });
    }

    #[test]
    fn test_mirroring_twice_is_identity() {
        let cases = [
            (MatchResult::Win, 1.0),
            (MatchResult::Win, 0.5),
            (MatchResult::Loss, 0.0),
            (MatchResult::Loss, 0.25),
            (MatchResult::Draw, 0.5),
        ];
        for (result, game_points) in cases {
            let match_points = result.match_points();
            let once = mirror(result, match_points, game_points).unwrap();
            let twice = mirror(once.result, once.match_points, once.game_points).unwrap();
            assert_eq!(twice.result, result);
            assert_eq!(twice.match_points, match_points);
            assert_eq!(twice.game_points, game_points);
        }
    }

    #[test]
    fn test_out_of_range_game_points_are_rejected() {
        assert!(matches!(mirror(MatchResult::Win, 2.0, 3.0), Err(ScoreboardError::Validation(_))));
        assert!(matches!(mirror(MatchResult::Loss, 0.0, -0.5), Err(ScoreboardError::Validation(_))));
        assert!(matches!(mirror(MatchResult::Win, -2.0, 1.0), Err(ScoreboardError::Validation(_))));
    }

    #[test]
    fn test_draws_reject_negative_or_non_finite_game_points() {
        assert!(matches!(mirror(MatchResult::Draw, 1.0, -3.0), Err(ScoreboardError::Validation(_))));
        assert!(matches!(mirror(MatchResult::Draw, 1.0, f64::NAN), Err(ScoreboardError::Validation(_))));
        assert_eq!(mirror(MatchResult::Draw, 1.0, 2.0).unwrap().game_points, 2.0);
    }

    #[test]
    fn test_mirror_record_swaps_sides() {
        let record = MatchRecord {
            event_id: "chess".to_string(),
            team: "A".to_string(),
            opponent: "B".to_string(),
            result: "win".to_string(),
            match_points: Some(2.0),
            game_points: Some(1.0),
            date: "2024-03-01".to_string(),
            round: Some(3),
        };
        let mirrored = mirror_record(&record, MatchResult::Win).unwrap();
        assert_eq!(mirrored.team, "B");
        assert_eq!(mirrored.opponent, "A");
        assert_eq!(mirrored.result, "loss");
        assert_eq!(mirrored.match_points, Some(0.0));
        assert_eq!(mirrored.game_points, Some(0.0));
        assert_eq!(mirrored.date, record.date);
        assert_eq!(mirrored.round, Some(3));
    }
}
