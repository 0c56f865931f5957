use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};
use tracing::{info, warn};

use super::error::{ApiError, ApiResult};
use super::AppState;
use crate::models::LoginRequest;
use crate::password::find_match_in_background;

/// Check an administrator's email and password.
///
/// On success the reply carries the administrator's fields, never the
/// password hash.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
    let (email, password) = request
        .credentials()
        .ok_or_else(|| ApiError::BadRequest("Email and password are required".to_string()))?;

    info!(email, "Login attempt");

    let mut candidates = state.db.find_credentials(email).await?;
    let hashes = candidates
        .iter()
        .map(|candidate| candidate.password_hash.clone())
        .collect();

    if let Some(index) = find_match_in_background(password.to_string(), hashes).await? {
        let user = candidates.swap_remove(index).user;
        info!(user_id = user.user_id, "Login succeeded");
        return Ok(Json(json!({ "user": user })));
    }

    warn!(email, "Login failed: invalid credentials");
    Err(ApiError::Unauthorized)
}
