use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::extract::{EntityId, ValidJson};
use super::{created, message, AppState};
use crate::models::{Department, DepartmentInput};

pub async fn list_departments(State(state): State<AppState>) -> ApiResult<Json<Vec<Department>>> {
    Ok(Json(state.db.list_departments().await?))
}

pub async fn get_department(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Department>> {
    state
        .db
        .get_department(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Department"))
}

pub async fn create_department(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<DepartmentInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = state.db.create_department(&input).await?;
    info!(department_id = id, name = input.department_name.as_str(), "Department created");
    Ok(created("Department created successfully", id))
}

pub async fn update_department(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(input): ValidJson<DepartmentInput>,
) -> ApiResult<Json<Value>> {
    state.db.update_department(id, &input).await?;
    info!(department_id = id, "Department updated");
    Ok(message("Department updated successfully"))
}

pub async fn delete_department(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Value>> {
    state.db.delete_department(id).await?;
    info!(department_id = id, "Department deleted");
    Ok(message("Department deleted successfully"))
}
