use std::sync::Arc;

use chrono::Utc;
use tokio::sync::Mutex;

use crate::db::layout::{
    self, fixture_columns, CULTURAL_SHEET, FIXTURES_SHEET, MATCHES_SHEET, MEDAL_COLUMNS,
    OVERALL_SHEET, SPORTS_SHEET,
};
use crate::db::store::{event_sheet_name, TabularStore};
use crate::error::ScoreboardError;
use crate::events::{EventRegistry, EventStrategy, Scoring};
use crate::league::mirror::mirror_record;
use crate::league::standings::{aggregate, tabulate_matches};
use crate::models::common::MatchResult;
use crate::models::event::{EventSummary, FormStructure, PlayerRequirements, ScoreUpdateRequest};
use crate::models::fixture::{AddFixtureRequest, Fixture, UpdateFixtureRequest};
use crate::models::matches::{AddMatchRequest, MatchRecord, RecordedMatch};
use crate::models::standings::{EventStandings, EventStandingsResponse, StandingEntry, StandingsScope};

/// Request-scoped operations over the tournament workbook.
///
/// Writes hold `write_lock` for their whole read-modify-write cycle, so two
/// upserts for the same division cannot interleave.
#[derive(Clone)]
pub struct ScoreboardService {
    store: Arc<dyn TabularStore>,
    registry: Arc<EventRegistry>,
    write_lock: Arc<Mutex<()>>,
}

fn require(value: &str, field: &str) -> Result<(), ScoreboardError> {
    if value.trim().is_empty() {
        return Err(ScoreboardError::validation(format!("Missing required field: {}", field)));
    }
    Ok(())
}

impl ScoreboardService {
    pub fn new(store: Arc<dyn TabularStore>, registry: Arc<EventRegistry>) -> Self {
        Self {
            store,
            registry,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn event(&self, event_id: &str) -> Result<&EventStrategy, ScoreboardError> {
        self.registry.lookup(event_id).ok_or_else(ScoreboardError::event_not_found)
    }

    pub fn list_events(&self) -> Vec<EventSummary> {
        self.registry.events().map(EventStrategy::summary).collect()
    }

    #[tracing::instrument(name = "Compute standings", skip(self))]
    pub async fn standings(&self, scope: StandingsScope) -> Result<Vec<StandingEntry>, ScoreboardError> {
        let sheet = match scope {
            StandingsScope::Overall => OVERALL_SHEET,
            StandingsScope::Sports => SPORTS_SHEET,
            StandingsScope::Cultural => CULTURAL_SHEET,
        };
        let rows = self.store.read_rows(sheet).await?;
        aggregate(&rows, None)
    }

    #[tracing::instrument(name = "Compute event standings", skip(self))]
    pub async fn event_standings(&self, event_id: &str) -> Result<EventStandingsResponse, ScoreboardError> {
        let event = self.event(event_id)?;
        let standings = match event.scoring {
            Scoring::MatchBased(stats) => {
                let matches = self.event_matches(event_id).await?;
                EventStandings::Matches(tabulate_matches(&matches, stats))
            }
            Scoring::MedalBased(points) => {
                let rows = self.store.read_rows(&event_sheet_name(event_id)).await?;
                EventStandings::Medals(aggregate(&rows, Some(points))?)
            }
        };
        tracing::debug!("Event {} has {} standings rows", event_id, standings.len());

        Ok(EventStandingsResponse {
            standings,
            table_structure: event.table_structure(),
        })
    }

    #[tracing::instrument(name = "Load event matches", skip(self))]
    pub async fn event_matches(&self, event_id: &str) -> Result<Vec<MatchRecord>, ScoreboardError> {
        self.event(event_id)?;
        let rows = self.store.read_rows(MATCHES_SHEET).await?;

        let mut matches = Vec::new();
        for (row_index, row) in rows.iter().enumerate() {
            if row.first().map(String::as_str) != Some(event_id) {
                continue;
            }
            if let Some(record) = layout::parse_match_row(row_index, row)? {
                matches.push(record);
            }
        }
        Ok(matches)
    }

    #[tracing::instrument(name = "Load event fixtures", skip(self))]
    pub async fn event_fixtures(&self, event_id: &str) -> Result<Vec<Fixture>, ScoreboardError> {
        self.event(event_id)?;
        let rows = self.store.read_rows(FIXTURES_SHEET).await?;
        Ok(rows
            .iter()
            .enumerate()
            .filter(|(_, row)| row.first().map(String::as_str) == Some(event_id))
            .map(|(row_index, row)| layout::parse_fixture_row(row_index, row))
            .collect())
    }

    pub fn rules(&self, event_id: &str) -> Result<String, ScoreboardError> {
        Ok(self.event(event_id)?.rules.clone())
    }

    pub fn form_structure(&self, event_id: &str) -> Result<FormStructure, ScoreboardError> {
        Ok(self.event(event_id)?.form_structure())
    }

    pub fn player_requirements(&self, event_id: &str) -> Result<PlayerRequirements, ScoreboardError> {
        Ok((self.event(event_id)?.player_requirements)())
    }

    /// Validate one reported match and store it together with its mirror.
    ///
    /// Both rows go out in a single append, so either both exist or neither.
    #[tracing::instrument(
        name = "Add match",
        skip(self, request),
        fields(event_id = %request.event_id, team1 = %request.team1, team2 = %request.team2)
    )]
    pub async fn add_match(&self, request: AddMatchRequest) -> Result<RecordedMatch, ScoreboardError> {
        require(&request.event_id, "eventId")?;
        let event = self.event(&request.event_id)?;
        require(&request.team1, "team1")?;
        require(&request.team2, "team2")?;
        require(&request.result, "result")?;
        let result = MatchResult::from_cell(&request.result).ok_or_else(|| {
            ScoreboardError::validation(format!(
                "Invalid result '{}': expected win, loss or draw",
                request.result
            ))
        })?;
        if let Some(validate) = event.validate_match {
            validate(&request).map_err(ScoreboardError::Validation)?;
        }

        let record = MatchRecord {
            event_id: request.event_id.clone(),
            team: request.team1.clone(),
            opponent: request.team2.clone(),
            result: result.as_str().to_string(),
            match_points: Some(request.match_points.unwrap_or_else(|| result.match_points())),
            game_points: Some(request.game_points.unwrap_or_else(|| result.default_game_points())),
            date: request
                .date
                .clone()
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| Utc::now().format("%Y-%m-%d").to_string()),
            round: Some(request.round.unwrap_or(1)),
        };
        let mirrored = mirror_record(&record, result)?;

        let _guard = self.write_lock.lock().await;
        self.store
            .append_rows(MATCHES_SHEET, vec![layout::match_row(&record), layout::match_row(&mirrored)])
            .await?;
        tracing::info!("Recorded {} {} vs {} in {}", record.result, record.team, record.opponent, record.event_id);

        Ok(RecordedMatch { record, mirrored })
    }

    /// Overwrite a division's medals in the event sheet, appending the division if new.
    #[tracing::instrument(
        name = "Update event score",
        skip(self, request),
        fields(event_id = %request.event_id, division = %request.division)
    )]
    pub async fn update_score(&self, request: ScoreUpdateRequest) -> Result<(), ScoreboardError> {
        require(&request.event_id, "eventId")?;
        let event = self.event(&request.event_id)?;
        require(&request.division, "division")?;
        (event.validate_score)(&request.division, request.gold, request.silver, request.bronze)
            .map_err(ScoreboardError::Validation)?;

        let sheet = event_sheet_name(&request.event_id);
        let medals = vec![request.gold.to_string(), request.silver.to_string(), request.bronze.to_string()];

        let _guard = self.write_lock.lock().await;
        let rows = self.store.read_rows(&sheet).await?;
        match rows.iter().position(|row| row.first() == Some(&request.division)) {
            Some(row_index) => {
                self.store.update_cells(&sheet, row_index, MEDAL_COLUMNS, medals).await?;
                tracing::info!("Updated medals of division {} in {}", request.division, sheet);
            }
            None => {
                let mut row = vec![request.division.clone()];
                row.extend(medals);
                // Points are derived on read
                row.push("0".to_string());
                self.store.append_rows(&sheet, vec![row]).await?;
                tracing::info!("Added division {} to {}", request.division, sheet);
            }
        }
        Ok(())
    }

    #[tracing::instrument(name = "Add fixture", skip(self, request), fields(event_id = %request.event_id))]
    pub async fn add_fixture(&self, request: AddFixtureRequest) -> Result<Fixture, ScoreboardError> {
        require(&request.event_id, "eventId")?;
        self.event(&request.event_id)?;
        require(&request.division1, "division1")?;
        require(&request.division2, "division2")?;
        if request.division1 == request.division2 {
            return Err(ScoreboardError::validation("A fixture needs two different divisions"));
        }

        let row = layout::new_fixture_row(&request);

        let _guard = self.write_lock.lock().await;
        let row_index = self.store.read_rows(FIXTURES_SHEET).await?.len();
        self.store.append_rows(FIXTURES_SHEET, vec![row.clone()]).await?;

        let fixture = layout::parse_fixture_row(row_index, &row);
        tracing::info!("Scheduled fixture {}", fixture.id);
        Ok(fixture)
    }

    /// Update a fixture by id. Only the fields present in the request change.
    #[tracing::instrument(name = "Update fixture", skip(self, request), fields(fixture_id = %request.id))]
    pub async fn update_fixture(&self, request: UpdateFixtureRequest) -> Result<Fixture, ScoreboardError> {
        require(&request.id, "id")?;
        let not_found = || ScoreboardError::NotFound("Fixture not found".to_string());
        let (event_id, row_index) = Fixture::parse_id(&request.id).ok_or_else(not_found)?;

        let _guard = self.write_lock.lock().await;
        let rows = self.store.read_rows(FIXTURES_SHEET).await?;
        let row = rows
            .get(row_index)
            .filter(|row| row.first().map(String::as_str) == Some(event_id))
            .ok_or_else(not_found)?;

        let mut fixture = layout::parse_fixture_row(row_index, row);
        if let Some(status) = request.status {
            fixture.status = status;
        }
        if let Some(date) = request.date {
            fixture.date = date;
        }
        if let Some(time) = request.time {
            fixture.time = time;
        }
        if let Some(venue) = request.venue {
            fixture.venue = venue;
        }
        if let Some(winner) = request.winner {
            fixture.winner = Some(winner).filter(|w| !w.is_empty());
        }
        if let Some(score) = request.score {
            fixture.score = Some(score).filter(|s| !s.is_empty());
        }

        self.store
            .update_cells(FIXTURES_SHEET, row_index, fixture_columns::DATE, layout::fixture_tail(&fixture))
            .await?;
        tracing::info!("Fixture {} is now {}", fixture.id, fixture.status);
        Ok(fixture)
    }
}
