use serde_json::{json, Value};

mod common;
use common::utils::{body_error, spawn_app};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn score_update_appends_then_updates_in_place() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "group-dance",
        "division": "C",
        "gold": 1
    })).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"success": true}));

    assert_eq!(test_app.rows("Group_Dance").await, vec![row(&["C", "1", "0", "0", "0"])]);

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "group-dance",
        "division": "C",
        "gold": 2,
        "silver": 1,
        "bronze": 4
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(test_app.rows("Group_Dance").await, vec![row(&["C", "2", "1", "4", "0"])]);
}

#[tokio::test]
async fn existing_rows_keep_their_other_cells() {
    let test_app = spawn_app().await;
    test_app.seed("Volleyball", &[
        &["A", "0", "0", "0", "12"],
        &["B", "1", "1", "1", "6"],
    ]).await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "volleyball",
        "division": "B",
        "gold": 3,
        "silver": 0,
        "bronze": 0
    })).await;
    assert_eq!(response.status().as_u16(), 200);

    assert_eq!(test_app.rows("Volleyball").await, vec![
        row(&["A", "0", "0", "0", "12"]),
        row(&["B", "3", "0", "0", "6"]),
    ]);
}

#[tokio::test]
async fn negative_medals_are_rejected() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "chess",
        "division": "A",
        "gold": 0,
        "silver": -2,
        "bronze": 0
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse error");
    assert_eq!(body_error(&body), "Medal counts cannot be negative");
    assert!(test_app.rows("Chess").await.is_empty());
}

#[tokio::test]
async fn all_zero_score_is_accepted() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "quiz",
        "division": "E",
        "gold": 0,
        "silver": 0,
        "bronze": 0
    })).await;
    assert_eq!(response.status().as_u16(), 200);
}

#[tokio::test]
async fn unknown_event_score_is_not_found() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "unknown-event",
        "division": "A",
        "gold": 1
    })).await;
    assert_eq!(response.status().as_u16(), 404);
}

#[tokio::test]
async fn oversized_medal_counts_are_rejected_and_standings_stay_readable() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/score/update", &json!({
        "eventId": "quiz",
        "division": "A",
        "gold": 5_000_000_000i64
    })).await;
    assert_eq!(response.status().as_u16(), 400);

    let body: Value = response.json().await.expect("Failed to parse error");
    assert_eq!(body_error(&body), "Medal counts cannot exceed 4294967295");
    assert!(test_app.rows("Quiz").await.is_empty());

    let response = test_app.get("/api/event/quiz/standings").await;
    assert_eq!(response.status().as_u16(), 200);
}
