use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::extract::{EntityId, ValidJson};
use super::{created, message, AppState};
use crate::models::{Employee, EmployeeInput};

pub async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.db.list_employees().await?))
}

pub async fn get_employee(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Employee>> {
    state
        .db
        .get_employee(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Employee"))
}

pub async fn create_employee(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<EmployeeInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = state.db.create_employee(&input).await?;
    info!(employee_id = id, "Employee created");
    Ok(created("Employee created successfully", id))
}

pub async fn update_employee(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(input): ValidJson<EmployeeInput>,
) -> ApiResult<Json<Value>> {
    state.db.update_employee(id, &input).await?;
    info!(employee_id = id, "Employee updated");
    Ok(message("Employee updated successfully"))
}

pub async fn delete_employee(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Value>> {
    state.db.delete_employee(id).await?;
    info!(employee_id = id, "Employee deleted");
    Ok(message("Employee deleted successfully"))
}
