//! Route table and request handlers.
//!
//! One path shape serves the whole API: `/feriados/{code}/{segment}`. For
//! GET the segment is a full `"YYYY-MM-DD"` date; for PUT and DELETE it is
//! either a fixed `"MM-DD"` date or the name of a movable feast, told apart
//! by membership in the closed feast set.

use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;

use feriados_core::errors::{Error, Result};
use feriados_core::JurisdictionCode;
use feriados_engine::{
    delete, delete_movable, resolve, upsert, upsert_movable, Holiday, MemoryStore, Mutation,
};
use feriados_time::{parse_iso, MonthDay, MovableFeast};

use crate::error::ApiError;
use crate::state::AppState;

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/feriados/:code/:segment",
            get(get_holiday).put(put_holiday).delete(delete_holiday),
        )
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

#[derive(Debug, Deserialize)]
struct UpsertBody {
    name: String,
}

/// A write-path segment: a fixed date or a movable feast name.
enum Segment {
    Dated(MonthDay),
    Movable(MovableFeast),
}

fn classify_segment(segment: &str) -> Result<Segment> {
    if let Some(feast) = MovableFeast::from_name(segment) {
        return Ok(Segment::Movable(feast));
    }
    MonthDay::parse(segment).map(Segment::Dated).map_err(|_| {
        Error::InvalidInput(format!(
            "segment {segment:?} is neither \"MM-DD\" nor a known movable holiday"
        ))
    })
}

async fn get_holiday(
    State(state): State<Arc<AppState>>,
    Path((code, date)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let code = JurisdictionCode::parse(&code)?;
    let date = parse_iso(&date)?;
    let store = read_store(&state)?;
    let holiday = resolve(&*store, &code, date)?;
    Ok(holiday_response(&holiday))
}

async fn put_holiday(
    State(state): State<Arc<AppState>>,
    Path((code, segment)): Path<(String, String)>,
    body: Option<Json<UpsertBody>>,
) -> Result<Response, ApiError> {
    let code = JurisdictionCode::parse(&code)?;
    let outcome = match classify_segment(&segment)? {
        Segment::Movable(feast) => {
            let mut store = write_store(&state)?;
            upsert_movable(&mut *store, feast, &code)?
        }
        Segment::Dated(date) => {
            let name = body
                .map(|Json(body)| body.name)
                .filter(|name| !name.trim().is_empty())
                .ok_or_else(|| {
                    Error::InvalidInput("missing holiday name in request body".to_owned())
                })?;
            let mut store = write_store(&state)?;
            upsert(&mut *store, &state.regions, &name, &code, date)?
        }
    };
    tracing::debug!(code = %code, segment = %segment, outcome = ?outcome, "holiday upserted");
    Ok(mutation_response(outcome))
}

async fn delete_holiday(
    State(state): State<Arc<AppState>>,
    Path((code, segment)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let code = JurisdictionCode::parse(&code)?;
    let outcome = match classify_segment(&segment)? {
        Segment::Movable(feast) => {
            let mut store = write_store(&state)?;
            delete_movable(&mut *store, &code, feast)?
        }
        Segment::Dated(date) => {
            let mut store = write_store(&state)?;
            delete(&mut *store, &state.regions, &code, date)?
        }
    };
    tracing::debug!(code = %code, segment = %segment, outcome = ?outcome, "holiday deleted");
    Ok(mutation_response(outcome))
}

// ── Encoding ───────────────────────────────────────────────────────────────

fn holiday_response(holiday: &Holiday) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "id": holiday.id.0,
            "name": holiday.name,
            "date": holiday.date.to_string(),
        })),
    )
        .into_response()
}

fn mutation_response(outcome: Mutation) -> Response {
    let status = match outcome {
        Mutation::Created(_) => StatusCode::CREATED,
        Mutation::Updated(_) | Mutation::Deleted(_) => StatusCode::OK,
    };
    (status, Json(json!({ "id": outcome.id().0 }))).into_response()
}

fn read_store(state: &AppState) -> Result<RwLockReadGuard<'_, MemoryStore>, ApiError> {
    state
        .store
        .read()
        .map_err(|_| ApiError(Error::Repository("holiday store lock poisoned".to_owned())))
}

fn write_store(state: &AppState) -> Result<RwLockWriteGuard<'_, MemoryStore>, ApiError> {
    state
        .store
        .write()
        .map_err(|_| ApiError(Error::Repository("holiday store lock poisoned".to_owned())))
}
