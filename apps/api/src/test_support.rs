//! Test harness: an in-memory `UserRepository` with the same observable
//! semantics as the PostgreSQL one, plus helpers for driving the router.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use http_body_util::BodyExt;
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt; // For oneshot()

use crate::errors::AppError;
use crate::models::user::{NewUser, User};
use crate::routes::build_router;
use crate::state::AppState;
use crate::users::repository::UserRepository;

#[derive(Default)]
struct Table {
    rows: Vec<User>,
    last_id: i32,
}

/// Rows kept in id order; ids are never reused, even after `clear`.
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deletes every row behind the service's back.
    pub async fn clear(&self) {
        self.table.write().await.rows.clear();
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<User, AppError> {
        let mut table = self.table.write().await;
        if table.rows.iter().any(|u| u.email == user.email) {
            return Err(AppError::duplicate_email());
        }
        table.last_id += 1;
        let row = User {
            id: table.last_id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: Utc::now(),
        };
        table.rows.push(row.clone());
        Ok(row)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.iter().find(|u| u.email == email).cloned())
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.table.read().await.rows.clone())
    }

    async fn update(&self, id: i32, user: &NewUser) -> Result<Option<User>, AppError> {
        let mut table = self.table.write().await;
        if table
            .rows
            .iter()
            .any(|u| u.id != id && u.email == user.email)
        {
            return Err(AppError::duplicate_email());
        }
        Ok(table.rows.iter_mut().find(|u| u.id == id).map(|row| {
            row.username = user.username.clone();
            row.email = user.email.clone();
            row.clone()
        }))
    }
}

/// A router over a fresh, empty store, plus a handle to that store.
pub fn test_app() -> (Router, InMemoryUserRepository) {
    let repo = InMemoryUserRepository::new();
    let state = AppState {
        users: Arc::new(repo.clone()),
    };
    (build_router(state), repo)
}

/// Inserts a row directly, bypassing the HTTP layer.
pub async fn add_user(repo: &InMemoryUserRepository, username: &str, email: &str) -> User {
    repo.insert(&NewUser {
        username: username.to_string(),
        email: email.to_string(),
    })
    .await
    .unwrap()
}

/// Sends one request and decodes the JSON response body.
pub async fn send_json(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<&Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}
