//! User Registry - a minimal registration/login HTTP service
//!
//! Two endpoints (`POST /register`, `GET /login`) over a process-lifetime
//! in-memory user store, with ordered per-field validation and localized
//! error messages.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: User entity, DTOs and field validation
//! - **services**: User store behind a service trait
//! - **api**: HTTP handlers, extractors, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Credentials, NewUser, User};
pub use errors::{AppError, AppResult};
