use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::info;

use super::error::{ApiError, ApiResult};
use super::extract::{EntityId, ValidJson};
use super::{created, message, AppState};
use crate::models::{User, UserInput};
use crate::password::hash_in_background;

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    Ok(Json(state.db.list_users().await?))
}

pub async fn get_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<User>> {
    state
        .db
        .get_user(id)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found("User"))
}

pub async fn create_user(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<UserInput>,
) -> ApiResult<(StatusCode, Json<Value>)> {
    let password = input
        .new_password()
        .ok_or_else(|| ApiError::BadRequest("password is required".to_string()))?;
    let hash = hash_in_background(password.to_string()).await?;

    let id = state.db.create_user(&input, &hash).await?;
    info!(user_id = id, "Administrator created");
    Ok(created("User created successfully", id))
}

/// Full replacement, except that an absent or empty password keeps the
/// stored one.
pub async fn update_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
    ValidJson(input): ValidJson<UserInput>,
) -> ApiResult<Json<Value>> {
    let hash = match input.new_password() {
        Some(password) => Some(hash_in_background(password.to_string()).await?),
        None => None,
    };

    state.db.update_user(id, &input, hash.as_deref()).await?;
    info!(user_id = id, password_changed = hash.is_some(), "Administrator updated");
    Ok(message("User updated successfully"))
}

pub async fn delete_user(
    State(state): State<AppState>,
    EntityId(id): EntityId,
) -> ApiResult<Json<Value>> {
    state.db.delete_user(id).await?;
    info!(user_id = id, "Administrator deleted");
    Ok(message("User deleted successfully"))
}
