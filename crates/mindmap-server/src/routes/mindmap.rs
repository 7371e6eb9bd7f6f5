use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::post, Json, Router};
use mindmap_service::PlanningService;
use serde::Deserialize;
use serde_json::{json, Value};

use super::{to_error, AppState};

type ApiResult = Result<Json<Value>, (StatusCode, Json<Value>)>;

#[derive(Debug, Deserialize)]
struct GenerateRequest {
    #[serde(default)]
    central_idea: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SubtopicsRequest {
    #[serde(default)]
    topic: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/generate", post(generate_mind_map))
        .route("/generate-subtopics", post(generate_subtopics))
}

async fn generate_mind_map(
    State(state): State<AppState>,
    body: Result<Json<GenerateRequest>, JsonRejection>,
) -> ApiResult {
    let Json(input) = body.map_err(bad_body)?;
    let central_idea = input.central_idea.unwrap_or_default();
    state
        .service
        .generate_mind_map(&central_idea)
        .await
        .map(Json)
        .map_err(to_error)
}

async fn generate_subtopics(
    State(state): State<AppState>,
    body: Result<Json<SubtopicsRequest>, JsonRejection>,
) -> ApiResult {
    let Json(input) = body.map_err(bad_body)?;
    let topic = input.topic.unwrap_or_default();
    state
        .service
        .generate_subtopics(&topic)
        .await
        .map(Json)
        .map_err(to_error)
}

fn bad_body(rejection: JsonRejection) -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "error": rejection.body_text() })),
    )
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use mindmap_llm::backend::MockBackend;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::test_helpers::test_router;

    async fn post_json(app: axum::Router, uri: &str, body: &str) -> (StatusCode, Value) {
        let resp = app
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn generate_returns_fallback_on_prose() {
        let mock = Arc::new(MockBackend::reply("I am just a language model."));
        let (status, v) = post_json(
            test_router(mock.clone()),
            "/generate",
            r#"{"central_idea": "Build a website"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(v["central"], "Build a website");
        assert_eq!(v["subtopics"].as_array().unwrap().len(), 8);
        assert_eq!(v["subtopics"][7]["name"], "Optimize for performance");
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn generate_missing_field_is_bad_request() {
        let mock = Arc::new(MockBackend::reply("{}"));
        let (status, v) = post_json(test_router(mock.clone()), "/generate", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "No central idea provided");
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn generate_null_field_is_bad_request() {
        let mock = Arc::new(MockBackend::reply("{}"));
        let (status, v) =
            post_json(test_router(mock), "/generate", r#"{"central_idea": null}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "No central idea provided");
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let mock = Arc::new(MockBackend::reply("[]"));
        let (status, v) =
            post_json(test_router(mock.clone()), "/generate-subtopics", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(v["error"].is_string());
        assert_eq!(mock.calls(), 0);
    }

    #[tokio::test]
    async fn subtopics_pass_through_model_output() {
        let mock = Arc::new(MockBackend::reply(
            r#"```json
[{"name": "Sketch three logo concepts"}, {"name": "Choose a typeface"}, {"name": "Export SVG and PNG files"}]
```"#,
        ));
        let (status, v) = post_json(
            test_router(mock),
            "/generate-subtopics",
            r#"{"topic": "design a logo"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let subtopics = v["subtopics"].as_array().unwrap();
        assert_eq!(subtopics.len(), 3);
        assert_eq!(subtopics[1]["name"], "Choose a typeface");
    }

    #[tokio::test]
    async fn subtopics_empty_topic_is_bad_request() {
        let mock = Arc::new(MockBackend::reply("[]"));
        let (status, v) =
            post_json(test_router(mock), "/generate-subtopics", r#"{"topic": ""}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(v["error"], "No topic provided");
    }

    #[tokio::test]
    async fn generation_failure_is_server_error() {
        let mock = Arc::new(MockBackend::failure("model crashed"));
        let (status, v) = post_json(
            test_router(mock),
            "/generate-subtopics",
            r#"{"topic": "Write tests"}"#,
        )
        .await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(v["error"], "generator unavailable: model crashed");
    }
}
