//! Request extractors that turn malformed input into `ApiError`s instead of
//! axum's default plain-text rejections.

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::Validate;

/// Parse every path parameter as a numeric id.
///
/// Anything that is not all ASCII digits is treated as an unmatched route.
async fn numeric_params<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<Vec<i64>, ApiError> {
    let Path(params) = Path::<Vec<(String, String)>>::from_request_parts(parts, state)
        .await
        .map_err(|_| ApiError::route_not_found())?;

    params
        .iter()
        .map(|(_, raw)| parse_id(raw).ok_or_else(ApiError::route_not_found))
        .collect()
}

fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// The single `{id}` segment of an entity route.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub i64);

impl<S: Send + Sync> FromRequestParts<S> for EntityId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match numeric_params(parts, state).await?.as_slice() {
            [id] => Ok(EntityId(*id)),
            _ => Err(ApiError::route_not_found()),
        }
    }
}

/// The `{employee_id}` and `{project_id}` segments of an assignment route.
#[derive(Debug, Clone, Copy)]
pub struct AssignmentIds {
    pub employee_id: i64,
    pub project_id: i64,
}

impl<S: Send + Sync> FromRequestParts<S> for AssignmentIds {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match numeric_params(parts, state).await?.as_slice() {
            [employee_id, project_id] => Ok(AssignmentIds {
                employee_id: *employee_id,
                project_id: *project_id,
            }),
            _ => Err(ApiError::route_not_found()),
        }
    }
}

/// A JSON body that has been deserialized and passed `Validate`.
#[derive(Debug)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::parse_id;

    #[test]
    fn only_plain_digits_are_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("+5"), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("12a"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
