use std::collections::HashMap;

use crate::events::{catalog, chess, medal};
use crate::events::strategy::EventStrategy;

/// Event id -> strategy, fixed at startup.
#[derive(Debug)]
pub struct EventRegistry {
    events: Vec<EventStrategy>,
    by_id: HashMap<&'static str, usize>,
}

impl EventRegistry {
    pub fn new(events: Vec<EventStrategy>) -> Self {
        let by_id = events
            .iter()
            .enumerate()
            .map(|(index, event)| (event.id, index))
            .collect();
        Self { events, by_id }
    }

    /// The sports and cultural catalogs. Chess is match-based, every other
    /// event is scored on medals.
    pub fn tournament() -> Self {
        let events = catalog::all()
            .map(|(id, name, category)| match id {
                chess::ID => chess::strategy(),
                _ => medal::strategy(id, name, category),
            })
            .collect();
        Self::new(events)
    }

    pub fn lookup(&self, event_id: &str) -> Option<&EventStrategy> {
        self.by_id.get(event_id).map(|&index| &self.events[index])
    }

    /// In catalog order
    pub fn events(&self) -> impl Iterator<Item = &EventStrategy> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::Scoring;
    use crate::models::event::EventCategory;

    #[test]
    fn test_tournament_catalog() {
        let registry = EventRegistry::tournament();
        assert_eq!(registry.len(), 24);
        assert_eq!(registry.events().filter(|e| e.category == EventCategory::Sports).count(), 16);
        assert_eq!(registry.events().filter(|e| e.category == EventCategory::Cultural).count(), 8);
        assert_eq!(registry.events().next().map(|e| e.id), Some("chess"));
    }

    #[test]
    fn test_lookup() {
        let registry = EventRegistry::tournament();

        let chess = registry.lookup("chess").unwrap();
        assert!(matches!(chess.scoring, Scoring::MatchBased(_)));

        let skit = registry.lookup("group-skit").unwrap();
        assert_eq!(skit.category, EventCategory::Cultural);
        assert!(matches!(skit.scoring, Scoring::MedalBased(_)));

        assert!(registry.lookup("unknown-event").is_none());
        assert!(registry.lookup("Chess").is_none());
    }
}
