//! Plan and plot endpoints
//!
//! `GET /api/plan`, `POST /api/plot`, `DELETE /api/plot/{plot_id}`.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use super::error::ApiError;
use crate::domain::{Entity, Plan, Plot};
use crate::repository::Repository;
use crate::AppState;

#[derive(Serialize)]
pub struct PlanResponse {
    pub plan: Plan,
}

pub async fn get_plan(State(state): State<AppState>) -> Result<Json<PlanResponse>, ApiError> {
    let plan = state.plots.plan().await?;
    Ok(Json(PlanResponse { plan }))
}

/// The body is parsed by hand so malformed JSON and missing fields get
/// distinct messages.
pub async fn upsert_plot(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let payload: Value =
        serde_json::from_slice(&body).map_err(|_| ApiError::bad_request("Invalid JSON"))?;
    let plot = Plot::from_payload(&payload)?;
    state.plots.upsert(&plot).await?;
    info!(plot_id = %plot.id(), vegetable = %plot.record.vegetable, "plot saved");
    Ok(Json(json!({ "ok": true })))
}

pub async fn delete_plot(
    State(state): State<AppState>,
    Path(plot_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if plot_id.is_empty() {
        return Err(ApiError::bad_request("Missing plot id"));
    }
    state.plots.delete(&plot_id).await?;
    info!(plot_id = %plot_id, "plot cleared");
    Ok(Json(json!({ "ok": true })))
}

/// `DELETE /api/plot/` with nothing after the slash
pub async fn missing_plot_id() -> ApiError {
    ApiError::bad_request("Missing plot id")
}
