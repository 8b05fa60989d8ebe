//! Vitals endpoints.
//!
//! Two endpoints:
//! - `POST /api/vitals` — record a reading
//! - `GET /api/vitals?user_id=..` — a user's readings, oldest first

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::{NewVitals, VitalsRecord};

/// `POST /api/vitals` — record a new vitals reading.
pub async fn record(
    State(ctx): State<ApiContext>,
    payload: Result<Json<NewVitals>, JsonRejection>,
) -> Result<(StatusCode, Json<VitalsRecord>), ApiError> {
    let Json(entry) = payload?;
    if entry.user_id.trim().is_empty() {
        return Err(ApiError::BadRequest("user_id is required".into()));
    }
    for (name, value) in [("bp", entry.bp), ("pulse", entry.pulse), ("sugar", entry.sugar)] {
        if let Some(v) = value {
            if !v.is_finite() || v < 0.0 {
                return Err(ApiError::BadRequest(format!("{name} must be a non-negative number")));
            }
        }
    }

    let stored = ctx.store.record(entry)?;
    tracing::info!(id = %stored.id, "Vitals recorded");

    Ok((StatusCode::CREATED, Json(stored)))
}

#[derive(Deserialize)]
pub struct VitalsHistoryQuery {
    pub user_id: String,
}

/// `GET /api/vitals` — readings for one user.
pub async fn history(
    State(ctx): State<ApiContext>,
    query: Result<Query<VitalsHistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<VitalsRecord>>, ApiError> {
    let Query(query) = query?;
    let records = ctx.store.history(&query.user_id)?;
    Ok(Json(records))
}
