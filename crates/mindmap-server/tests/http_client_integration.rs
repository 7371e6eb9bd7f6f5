//! Integration tests for HttpPlanner against a real server.
//!
//! Each test spawns an in-process axum server on 127.0.0.1:0 backed by a
//! mock or offline generator, then exercises the HTTP client layer through
//! the full request/response cycle.

use std::sync::Arc;

use mindmap_llm::backend::{MockBackend, OfflineBackend};
use mindmap_llm::Generator;
use mindmap_service::{HttpPlanner, PlanningService, ServiceError};

async fn spawn_server(generator: Arc<dyn Generator>) -> String {
    let server = mindmap_server::test_helpers::spawn_test_server(generator).await;
    server.base_url
}

#[tokio::test]
async fn health_check_via_http() {
    let url = spawn_server(Arc::new(OfflineBackend)).await;
    let planner = HttpPlanner::new(&url);
    let health = planner.health_check().await.unwrap();
    assert_eq!(health["status"], "ok");
    assert_eq!(health["generator"], "offline");
}

#[tokio::test]
async fn mind_map_via_http_uses_model_output() {
    let mock = Arc::new(MockBackend::reply(
        r#"{"central": "Open a bakery", "subtopics": [
            {"name": "Write a business plan", "children": [{"name": "Estimate startup costs"}, {"name": "Research local competition"}]},
            {"name": "Secure a retail location", "children": [{"name": "Tour available spaces"}, {"name": "Negotiate the lease"}]},
            {"name": "Source baking equipment", "children": [{"name": "Price commercial ovens"}, {"name": "Order mixers"}]},
            {"name": "Obtain food service permits", "children": [{"name": "Schedule health inspection"}, {"name": "File business license"}]},
            {"name": "Plan the opening menu", "children": [{"name": "Test bread recipes"}, {"name": "Price each item"}]}
        ]}"#,
    ));
    let url = spawn_server(mock.clone()).await;
    let planner = HttpPlanner::new(&url);

    let map = planner.generate_mind_map("Open a bakery").await.unwrap();
    assert_eq!(map["central"], "Open a bakery");
    let subtopics = map["subtopics"].as_array().unwrap();
    assert_eq!(subtopics.len(), 5);
    assert_eq!(subtopics[3]["name"], "Obtain food service permits");
    assert_eq!(mock.calls(), 1);
}

#[tokio::test]
async fn mind_map_via_http_falls_back_on_generic_output() {
    let mock = Arc::new(MockBackend::reply(
        r#"{"central": "Analyze some CSV data", "subtopics": [{"name": "Task 1"}, {"name": "Task 2"}]}"#,
    ));
    let url = spawn_server(mock).await;
    let planner = HttpPlanner::new(&url);

    let map = planner.generate_mind_map("Analyze some CSV data").await.unwrap();
    let names: Vec<&str> = map["subtopics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names.len(), 8);
    assert_eq!(names[1], "Collect and prepare data");
    assert_eq!(names[7], "Create visualization dashboard");
}

#[tokio::test]
async fn subtopics_via_http_offline() {
    let url = spawn_server(Arc::new(OfflineBackend)).await;
    let planner = HttpPlanner::new(&url);

    let list = planner.generate_subtopics("Implement login flow").await.unwrap();
    let subtopics = list["subtopics"].as_array().unwrap();
    assert_eq!(subtopics.len(), 5);
    assert_eq!(subtopics[0]["name"], "Break down Implement login flow into smaller functions");
    assert!(subtopics.iter().all(|s| s.get("children").is_none()));
}

#[tokio::test]
async fn empty_input_via_http_is_invalid_input() {
    let mock = Arc::new(MockBackend::reply("[]"));
    let url = spawn_server(mock.clone()).await;
    let planner = HttpPlanner::new(&url);

    let err = planner.generate_subtopics("").await.unwrap_err();
    match err {
        ServiceError::InvalidInput(msg) => assert_eq!(msg, "No topic provided"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(mock.calls(), 0);
}

#[tokio::test]
async fn generation_failure_via_http_keeps_its_class() {
    let url = spawn_server(Arc::new(MockBackend::failure("out of memory"))).await;
    let planner = HttpPlanner::new(&url);

    let err = planner.generate_mind_map("Build a website").await.unwrap_err();
    match err {
        ServiceError::Generation(msg) => assert_eq!(msg, "generator unavailable: out of memory"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn raw_request_without_field_gets_error_payload() {
    let url = spawn_server(Arc::new(OfflineBackend)).await;
    let resp = reqwest::Client::new()
        .post(format!("{url}/generate"))
        .json(&serde_json::json!({ "idea": "wrong field" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "No central idea provided" }));
}
