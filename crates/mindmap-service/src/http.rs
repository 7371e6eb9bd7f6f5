use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

use crate::{PlanningService, ServiceError};

/// Async HTTP client implementation of PlanningService.
/// Connects to a running mindmap-server.
pub struct HttpPlanner {
    base_url: String,
    client: Client,
}

impl HttpPlanner {
    pub fn new(base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            client: Client::new(),
        }
    }

    /// Check if the server is reachable.
    pub async fn health_check(&self) -> Result<Value, ServiceError> {
        let resp = self
            .client
            .get(format!("{}/api/health", self.base_url))
            .send()
            .await
            .map_err(|e| ServiceError::Internal(format!("connection failed: {e}")))?;
        handle_response(resp).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, ServiceError> {
        let resp = self
            .client
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|e| ServiceError::Internal(e.to_string()))?;
        handle_response(resp).await
    }
}

async fn handle_response(resp: reqwest::Response) -> Result<Value, ServiceError> {
    let status = resp.status();
    if status.is_success() {
        resp.json::<Value>()
            .await
            .map_err(|e| ServiceError::Internal(format!("json decode: {e}")))
    } else {
        Err(parse_error_with_status(status, resp).await)
    }
}

async fn parse_error_with_status(status: StatusCode, resp: reqwest::Response) -> ServiceError {
    let body = resp.text().await.unwrap_or_default();
    let msg = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| v["error"].as_str().map(String::from))
        .unwrap_or(body);

    match status {
        StatusCode::BAD_REQUEST => ServiceError::InvalidInput(msg),
        StatusCode::BAD_GATEWAY => ServiceError::Generation(msg),
        _ => ServiceError::Internal(msg),
    }
}

#[async_trait]
impl PlanningService for HttpPlanner {
    async fn generate_mind_map(&self, central_idea: &str) -> Result<Value, ServiceError> {
        self.post_json("/generate", &json!({ "central_idea": central_idea }))
            .await
    }

    async fn generate_subtopics(&self, topic: &str) -> Result<Value, ServiceError> {
        self.post_json("/generate-subtopics", &json!({ "topic": topic }))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let planner = HttpPlanner::new("http://127.0.0.1:5000/");
        assert_eq!(planner.base_url, "http://127.0.0.1:5000");
    }

    #[tokio::test]
    async fn unreachable_server_is_internal_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let planner = HttpPlanner::new(&format!("http://{addr}"));
        let err = planner.generate_subtopics("x").await.unwrap_err();
        assert!(matches!(err, ServiceError::Internal(_)));
    }
}
