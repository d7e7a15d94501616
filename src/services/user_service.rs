//! User service - the in-memory user registry.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{Credentials, NewUser, User};
use crate::errors::{AppError, AppResult};

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user, returning the assigned id.
    ///
    /// Usernames are unique (case-sensitive exact match); ids are
    /// sequential and 1-based.
    async fn register(&self, new_user: NewUser) -> AppResult<u32>;

    /// Find the user matching both username and password exactly.
    async fn authenticate(&self, credentials: Credentials) -> AppResult<User>;
}

/// In-memory user registry; records live for the process lifetime.
///
/// A single write lock covers the duplicate check and the insert, so two
/// concurrent registrations with the same username cannot both succeed.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserService for InMemoryUserStore {
    async fn register(&self, new_user: NewUser) -> AppResult<u32> {
        let mut users = self.users.write().await;

        if users.iter().any(|u| u.username == new_user.username) {
            return Err(AppError::UsernameTaken);
        }

        let id = users.len() as u32 + 1;
        tracing::info!(id, username = %new_user.username, "user registered");
        users.push(User {
            id,
            username: new_user.username,
            password: new_user.password,
            email: new_user.email,
        });

        Ok(id)
    }

    async fn authenticate(&self, credentials: Credentials) -> AppResult<User> {
        let users = self.users.read().await;

        users
            .iter()
            .find(|u| u.username == credentials.username && u.password == credentials.password)
            .cloned()
            .ok_or(AppError::InvalidCredentials)
    }
}
