use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::models::user::User;
use crate::state::AppState;
use crate::users::extract::{UserIdPath, UserJson};
use crate::users::service;

#[derive(Debug, Serialize)]
pub struct UserCreatedResponse {
    pub message: String,
    pub id: i32,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// POST /users
pub async fn handle_create_user(
    State(state): State<AppState>,
    UserJson(new_user): UserJson,
) -> Result<(StatusCode, Json<UserCreatedResponse>), AppError> {
    let user = service::create_user(state.users.as_ref(), new_user).await?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: format!("{} was added!", user.email),
            id: user.id,
        }),
    ))
}

/// GET /users
pub async fn handle_list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, AppError> {
    Ok(Json(service::list_users(state.users.as_ref()).await?))
}

/// GET /users/:id
pub async fn handle_get_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> Result<Json<User>, AppError> {
    Ok(Json(service::get_user(state.users.as_ref(), id).await?))
}

/// PUT /users/:id
pub async fn handle_update_user(
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    UserJson(changes): UserJson,
) -> Result<Json<MessageResponse>, AppError> {
    let user = service::update_user(state.users.as_ref(), id, changes).await?;
    Ok(Json(MessageResponse {
        message: format!("User {} information updated successfully!", user.id),
    }))
}
