use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::errors::AppError;
use crate::models::user::NewUser;
use crate::users::validation::validate_user_payload;

/// JSON body extractor for user payloads.
///
/// Malformed JSON, a wrong content type and shape errors all surface as
/// `AppError::Validation` instead of Axum's plain-text rejections.
pub struct UserJson(pub NewUser);

#[async_trait]
impl<S> FromRequest<S> for UserJson
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<Value>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let reason = rejection.body_text();
                debug!("Rejected user payload: {reason}");
                let mut errors = BTreeMap::new();
                errors.insert("body".to_string(), reason);
                AppError::validation(errors)
            })?;

        validate_user_payload(&body).map(UserJson)
    }
}

/// The `:id` path segment of `/users/:id`.
pub struct UserIdPath(pub i32);

#[async_trait]
impl<S> FromRequestParts<S> for UserIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;

        parse_user_id(&raw)
            .map(UserIdPath)
            .ok_or_else(|| AppError::user_not_found(&raw))
    }
}

/// Ids are positive `SERIAL` values written in canonical decimal form:
/// no sign and no leading zeros. Anything else cannot name a row.
pub fn parse_user_id(raw: &str) -> Option<i32> {
    if raw.starts_with('0') || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
