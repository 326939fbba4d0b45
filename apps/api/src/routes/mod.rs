pub mod health;

use axum::{routing::get, Router};

use crate::errors::AppError;
use crate::state::AppState;
use crate::users::handlers;

async fn not_found() -> AppError {
    AppError::NotFound("The requested URL was not found on the server.".to_string())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/ping", get(health::ping_handler))
        .route(
            "/users",
            get(handlers::handle_list_users).post(handlers::handle_create_user),
        )
        .route(
            "/users/:id",
            get(handlers::handle_get_user).put(handlers::handle_update_user),
        )
        .fallback(not_found)
        .with_state(state)
}
