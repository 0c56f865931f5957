use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::extract::{EntityId, ValidJson};
use super::{created, message, AppState};
use crate::models::{Project, ProjectInput};

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Json<Vec<Project>>> {
    Ok(Json(state.db.list_projects().await?))
}

pub async fn get_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Project>> {
    state
        .db
        .get_project(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Project"))
}

pub async fn create_project(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<ProjectInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let id = state.db.create_project(&input).await?;
    info!(project_id = id, status = input.status.as_str(), "Project created");
    Ok(created("Project created successfully", id))
}

pub async fn update_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(input): ValidJson<ProjectInput>,
) -> ApiResult<Json<Value>> {
    state.db.update_project(id, &input).await?;
    info!(project_id = id, status = input.status.as_str(), "Project updated");
    Ok(message("Project updated successfully"))
}

pub async fn delete_project(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Value>> {
    state.db.delete_project(id).await?;
    info!(project_id = id, "Project deleted");
    Ok(message("Project deleted successfully"))
}
