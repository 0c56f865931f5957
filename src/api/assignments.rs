use axum::{extract::State, Json};
use serde_json::Value;
use tracing::info;

use super::error::ApiResult;
use super::extract::{AssignmentIds, EntityId};
use super::{message, AppState};
use crate::models::AssignedProject;

pub async fn list_employee_projects(
    State(state): State<AppState>,
    EntityId(employee_id): EntityId,
) -> ApiResult<Json<Vec<AssignedProject>>> {
    Ok(Json(state.db.list_employee_projects(employee_id).await?))
}

pub async fn assign_project(
    State(state): State<AppState>,
    ids: AssignmentIds,
) -> ApiResult<Json<Value>> {
    state.db.assign_project(ids.employee_id, ids.project_id).await?;
    info!(employee_id = ids.employee_id, project_id = ids.project_id, "Project assigned");
    Ok(message("Project assigned successfully"))
}

pub async fn unassign_project(
    State(state): State<AppState>,
    ids: AssignmentIds,
) -> ApiResult<Json<Value>> {
    state.db.unassign_project(ids.employee_id, ids.project_id).await?;
    info!(employee_id = ids.employee_id, project_id = ids.project_id, "Project unassigned");
    Ok(message("Project unassigned successfully"))
}
