use serde_json::{json, Value};

mod common;
use common::utils::{body_error, spawn_app};

fn fixture_request(event_id: &str, division1: &str, division2: &str) -> Value {
    json!({
        "eventId": event_id,
        "division1": division1,
        "division2": division2,
        "date": "2024-03-05",
        "time": "18:30",
        "venue": "Main Hall"
    })
}

#[tokio::test]
async fn added_fixtures_are_scheduled_and_listed() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/fixture/add", &fixture_request("squash", "A", "B")).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["fixture"]["id"], "squash-0");
    assert_eq!(body["fixture"]["status"], "scheduled");

    test_app.post("/api/fixture/add", &fixture_request("pool", "C", "D")).await;
    test_app.post("/api/fixture/add", &fixture_request("squash", "D", "E")).await;

    let fixtures: Vec<Value> = test_app.get("/api/event/squash/fixtures").await
        .json().await.expect("Failed to parse fixtures");
    assert_eq!(fixtures.len(), 2);
    assert_eq!(fixtures[0], json!({
        "id": "squash-0",
        "eventId": "squash",
        "division1": "A",
        "division2": "B",
        "date": "2024-03-05",
        "time": "18:30",
        "venue": "Main Hall",
        "status": "scheduled",
        "winner": null,
        "score": null
    }));
    assert_eq!(fixtures[1]["id"], "squash-2");
}

#[tokio::test]
async fn fixture_update_completes_a_fixture() {
    let test_app = spawn_app().await;
    test_app.post("/api/fixture/add", &fixture_request("lawn-tennis", "A", "B")).await;

    let response = test_app.post("/api/fixture/update", &json!({
        "id": "lawn-tennis-0",
        "status": "completed",
        "winner": "B",
        "score": "6-4, 6-3"
    })).await;
    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["fixture"]["winner"], "B");

    let fixtures: Vec<Value> = test_app.get("/api/event/lawn-tennis/fixtures").await
        .json().await.expect("Failed to parse fixtures");
    assert_eq!(fixtures[0]["status"], "completed");
    assert_eq!(fixtures[0]["score"], "6-4, 6-3");
    assert_eq!(fixtures[0]["venue"], "Main Hall");
}

#[tokio::test]
async fn unknown_fixture_is_not_found() {
    let test_app = spawn_app().await;
    test_app.post("/api/fixture/add", &fixture_request("pool", "A", "B")).await;

    let response = test_app.post("/api/fixture/update", &json!({
        "id": "pool-7",
        "status": "completed"
    })).await;
    assert_eq!(response.status().as_u16(), 404);
    let body: Value = response.json().await.expect("Failed to parse error");
    assert_eq!(body_error(&body), "Fixture not found");
}

#[tokio::test]
async fn fixture_needs_two_divisions() {
    let test_app = spawn_app().await;

    let response = test_app.post("/api/fixture/add", &fixture_request("pool", "A", "A")).await;
    assert_eq!(response.status().as_u16(), 400);

    let response = test_app.post("/api/fixture/add", &fixture_request("pool", "A", "")).await;
    assert_eq!(response.status().as_u16(), 400);
    let body: Value = response.json().await.expect("Failed to parse error");
    assert_eq!(body_error(&body), "Missing required field: division2");
}
