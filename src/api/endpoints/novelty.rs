//! Structured symptom analysis endpoint.
//!
//! `POST /api/novelty/analyze` — classify an explicit symptom list.
//! The payload is validated by hand so that a non-list or non-string member
//! surfaces as `INVALID_INPUT`; body rejections go through `ApiError` too.

use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use crate::api::error::ApiError;
use crate::triage::{analyze_symptom_list, parse_symptom_list};

#[derive(Serialize)]
pub struct PredictionResponse {
    pub prediction: String,
}

/// `POST /api/novelty/analyze` — `{ "symptoms": [..] }` → `{ "prediction": .. }`.
pub async fn analyze(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<PredictionResponse>, ApiError> {
    let Json(body) = payload?;
    let raw = body
        .get("symptoms")
        .ok_or_else(|| ApiError::InvalidInput("symptoms is required".into()))?;
    let symptoms = parse_symptom_list(raw)?;

    let prediction = analyze_symptom_list(&symptoms);
    tracing::info!(symptom_count = symptoms.len(), "Structured symptom list analyzed");

    Ok(Json(PredictionResponse { prediction }))
}
