use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::user::{NewUser, User};
use crate::users::repository::UserRepository;

/// Persists a new user unless the email is already taken.
pub async fn create_user(repo: &dyn UserRepository, new_user: NewUser) -> Result<User, AppError> {
    if repo.find_by_email(&new_user.email).await?.is_some() {
        warn!(email = %new_user.email, "Rejected duplicate email");
        return Err(AppError::duplicate_email());
    }

    let user = repo.insert(&new_user).await?;
    info!(user_id = user.id, email = %user.email, "Created user");
    Ok(user)
}

pub async fn get_user(repo: &dyn UserRepository, id: i32) -> Result<User, AppError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::user_not_found(id))
}

pub async fn list_users(repo: &dyn UserRepository) -> Result<Vec<User>, AppError> {
    repo.list().await
}

/// Overwrites `username` and `email` of user `id`.
///
/// Keeping one's own email is allowed; taking another user's is a conflict.
pub async fn update_user(
    repo: &dyn UserRepository,
    id: i32,
    changes: NewUser,
) -> Result<User, AppError> {
    get_user(repo, id).await?;

    if let Some(owner) = repo.find_by_email(&changes.email).await? {
        if owner.id != id {
            warn!(user_id = id, email = %changes.email, "Rejected email owned by user {}", owner.id);
            return Err(AppError::duplicate_email());
        }
    }

    let user = repo
        .update(id, &changes)
        .await?
        .ok_or_else(|| AppError::user_not_found(id))?;
    info!(user_id = user.id, email = %user.email, "Updated user");
    Ok(user)
}
