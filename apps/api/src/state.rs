use std::sync::Arc;

use crate::users::repository::UserRepository;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// User storage. `PgUserRepository` in production.
    pub users: Arc<dyn UserRepository>,
}
