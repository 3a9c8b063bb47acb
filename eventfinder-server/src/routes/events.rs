//! Event endpoints

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use eventfinder_core::geo::{EventFilter, ListQuery, filter_and_sort};
use eventfinder_core::intake::{ValidationError, validate_and_normalize};
use eventfinder_core::{Event, ListedEvent};

use crate::routes::{AppError, MessageResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events))
        .route("/events/{id}", get(get_event).delete(delete_event))
        .route("/add-event", post(add_event))
}

/// Raw query string of GET /events; numbers are validated by `ListQuery`
#[derive(Deserialize)]
pub struct ListParams {
    pub lat: Option<String>,
    pub lng: Option<String>,
    pub radius: Option<String>,
    pub district: Option<String>,
    pub place: Option<String>,
    pub category: Option<String>,
}

/// Response to a successful POST /add-event
#[derive(Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// GET /events - List events, nearest first when a location is given
async fn list_events(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<Vec<ListedEvent>>, AppError> {
    let Query(params) = params.map_err(|rejection| AppError::BadQuery(rejection.body_text()))?;

    let filter = EventFilter::new(
        params.district.as_deref(),
        params.place.as_deref(),
        params.category.as_deref(),
    );
    let query = ListQuery::from_raw(
        params.lat.as_deref(),
        params.lng.as_deref(),
        params.radius.as_deref(),
        filter,
    )?;

    let events = state.store.list_events(&query.filter)?;

    Ok(Json(filter_and_sort(events, &query)))
}

/// GET /events/:id - A single event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ListedEvent>, AppError> {
    let id = parse_id(&id)?;
    let event: Event = state.store.get_event(id)?;

    Ok(Json(event.into()))
}

/// POST /add-event - Validate and store a new event
async fn add_event(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreatedResponse>), AppError> {
    let Json(payload) = payload.map_err(|_| ValidationError::MalformedInput)?;

    let event = validate_and_normalize(&payload)?;
    let id = state.store.insert_event(&event)?;
    tracing::info!(id, name = %event.name, category = %event.category, "event added");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Event added successfully!".to_string(),
            id,
        }),
    ))
}

/// DELETE /events/:id - Remove an event
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = parse_id(&id)?;
    state.store.delete_event(id)?;
    tracing::info!(id, "event deleted");

    Ok(Json(MessageResponse {
        message: format!("Event {id} deleted."),
    }))
}

/// Ids that are not integers can never match an event
fn parse_id(raw: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Event {raw} not found")))
}
