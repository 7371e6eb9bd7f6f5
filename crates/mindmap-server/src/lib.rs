mod routes;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use mindmap_service::LocalPlanner;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

pub use routes::{build_router, AppState, InnerAppState};

/// Full application: API routes, optional static front-end, CORS.
pub fn build_app(planner: LocalPlanner, static_dir: Option<PathBuf>) -> Router {
    let state = Arc::new(InnerAppState { service: planner });
    let mut app = build_router(state);
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir).append_index_html_on_directories(true));
    }
    app.layer(CorsLayer::permissive())
}

pub async fn serve(
    listener: TcpListener,
    planner: LocalPlanner,
    static_dir: Option<PathBuf>,
) -> Result<()> {
    let app = build_app(planner, static_dir);
    axum::serve(listener, app).await?;
    Ok(())
}
