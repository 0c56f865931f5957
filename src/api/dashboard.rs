use axum::{extract::State, Json};
use serde_json::{json, Value};

use super::error::ApiResult;
use super::AppState;
use crate::models::DashboardStats;

pub async fn dashboard_stats(State(state): State<AppState>) -> ApiResult<Json<DashboardStats>> {
    Ok(Json(state.db.dashboard_stats().await?))
}

/// Storage connectivity probe.
pub async fn connection_test(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    state.db.ping().await?;
    Ok(Json(json!({ "message": "Database connection successful" })))
}
