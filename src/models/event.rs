use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Sports,
    Cultural,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EventSummary {
    pub id: String,
    pub name: String,
    pub category: EventCategory,
}

/// How a computed statistic is rendered in a standings table
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TableColumn {
    pub key: String,
    pub label: String,
    #[serde(rename = "type")]
    pub column_type: String,
}

impl TableColumn {
    pub fn new(key: &str, label: &str, column_type: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            column_type: column_type.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormField {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub required: bool,
}

impl FormField {
    pub fn new(name: &str, label: &str, field_type: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type: field_type.to_string(),
            options: None,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_options(mut self, options: &[&str]) -> Self {
        self.options = Some(options.iter().map(|o| o.to_string()).collect());
        self
    }
}

/// Fields of the result-entry form an admin fills in for an event
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FormStructure {
    #[serde(rename = "type")]
    pub form_type: String,
    pub fields: Vec<FormField>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct PlayerRequirements {
    pub min_players: u32,
    pub max_players: u32,
    pub roles: Vec<String>,
    pub gender_requirements: BTreeMap<String, u32>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RulesResponse {
    pub rules: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct ScoreUpdateRequest {
    #[serde(rename = "eventId", default)]
    pub event_id: String,
    #[serde(default)]
    pub division: String,
    #[serde(default)]
    pub gold: i64,
    #[serde(default)]
    pub silver: i64,
    #[serde(default)]
    pub bronze: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_field_serialization_omits_defaults() {
        let field = FormField::new("match_points", "Match Points", "number");
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({"name": "match_points", "label": "Match Points", "type": "number"})
        );

        let field = FormField::new("result", "Result", "select").with_options(&["win", "loss"]).required();
        assert_eq!(
            serde_json::to_value(&field).unwrap(),
            json!({"name": "result", "label": "Result", "type": "select", "options": ["win", "loss"], "required": true})
        );
    }

    #[test]
    fn test_score_update_defaults_missing_medals_to_zero() {
        let request: ScoreUpdateRequest =
            serde_json::from_value(json!({"eventId": "chess", "division": "A", "gold": 2})).unwrap();
        assert_eq!(request.gold, 2);
        assert_eq!(request.silver, 0);
        assert_eq!(request.bronze, 0);
    }
}
