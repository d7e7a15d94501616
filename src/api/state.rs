//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::services::{InMemoryUserStore, UserService};

/// Application state holding the injected user service.
///
/// The store is owned here and handed to handlers through the router,
/// never reached through a process-wide singleton.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserService>,
}

impl AppState {
    /// Create application state with a manually injected service.
    pub fn new(user_service: Arc<dyn UserService>) -> Self {
        Self { user_service }
    }

    /// Create application state backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryUserStore::new()))
    }
}
