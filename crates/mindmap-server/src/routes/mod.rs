pub mod health;
pub mod mindmap;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::{Json, Router};
use mindmap_service::{LocalPlanner, ServiceError};
use serde_json::{json, Value};

/// Read-only for the life of the process; the generator inside was
/// resolved once at startup.
pub struct InnerAppState {
    pub service: LocalPlanner,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(mindmap::routes())
        .with_state(state)
}

/// 400 for bad input, 502 when the generator call failed, 500 otherwise.
pub(crate) fn to_error(e: ServiceError) -> (StatusCode, Json<Value>) {
    let status = match &e {
        ServiceError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        ServiceError::Generation(_) => StatusCode::BAD_GATEWAY,
        ServiceError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": e.to_string() })))
}
