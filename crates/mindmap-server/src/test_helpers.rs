use std::sync::Arc;

use axum::Router;
use mindmap_llm::Generator;
use mindmap_service::LocalPlanner;
use tokio::net::TcpListener;

use crate::routes::InnerAppState;

/// Build a test router around the given generator, without static files or CORS.
pub fn test_router(generator: Arc<dyn Generator>) -> Router {
    let state = Arc::new(InnerAppState {
        service: LocalPlanner::new(generator),
    });
    crate::routes::build_router(state)
}

/// A running test server with base_url and background task handle.
pub struct TestServer {
    pub base_url: String,
    _handle: tokio::task::JoinHandle<()>,
}

/// Spawn an axum test server on a random port. Returns the TestServer
/// with the `base_url` (e.g. "http://127.0.0.1:12345").
pub async fn spawn_test_server(generator: Arc<dyn Generator>) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{addr}");
    let app = test_router(generator);
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base_url,
        _handle: handle,
    }
}
