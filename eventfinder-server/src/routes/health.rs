//! Liveness endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub events: usize,
}

/// GET /health - Report that the store is reachable
async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    let events = state.store.count()?;
    Ok(Json(HealthResponse {
        status: "ok",
        events,
    }))
}
