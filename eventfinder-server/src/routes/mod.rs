pub mod events;
pub mod health;

use std::path::Path;

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use eventfinder_core::error::EventFinderError;
use eventfinder_core::intake::ValidationError;
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router.
///
/// When `static_dir` is set, `/` serves its index.html, `/add-event-page`
/// serves add-event.html and any other unmatched path falls back to the
/// directory's files.
pub fn router(state: AppState, static_dir: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new()
        .merge(events::router())
        .merge(health::router());

    if let Some(dir) = static_dir {
        app = app
            .route_service("/", ServeFile::new(dir.join("index.html")))
            .route_service("/add-event-page", ServeFile::new(dir.join("add-event.html")))
            .fallback_service(ServeDir::new(dir));
    }

    app.with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Error body for lookups and listing queries
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body for submissions and deletions
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Errors a handler can return, each with its HTTP status and body shape
#[derive(Debug)]
pub enum AppError {
    /// Malformed listing parameters: 400 `{error}`
    BadQuery(String),
    /// Rejected submission: 400 `{message}`
    Rejected(String),
    /// Unknown event: 404 `{error}`
    NotFound(String),
    /// Anything else: 500 `{error}`
    Internal(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadQuery(error) => {
                (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
            }
            AppError::Rejected(message) => {
                (StatusCode::BAD_REQUEST, Json(MessageResponse { message })).into_response()
            }
            AppError::NotFound(error) => {
                (StatusCode::NOT_FOUND, Json(ErrorResponse { error })).into_response()
            }
            AppError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                let body = Json(ErrorResponse {
                    error: err.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}

impl From<EventFinderError> for AppError {
    fn from(err: EventFinderError) -> Self {
        match err {
            EventFinderError::MalformedInput(msg) => AppError::BadQuery(msg),
            EventFinderError::EventNotFound(_) => AppError::NotFound(err.to_string()),
            EventFinderError::Validation(v) => v.into(),
            other => AppError::Internal(other.into()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Rejected(err.to_string())
    }
}
