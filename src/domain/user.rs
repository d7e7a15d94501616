//! User domain entity and related types.

use serde::Serialize;
use utoipa::ToSchema;

/// User domain entity.
///
/// Passwords are kept and echoed back verbatim: this service has no
/// hashing or session layer, and records live only for the process
/// lifetime.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct User {
    /// Sequential identifier, 1-based, assigned on registration
    #[schema(example = 1)]
    pub id: u32,
    #[schema(example = "steven_123")]
    pub username: String,
    #[schema(example = "abcde12345")]
    pub password: String,
    /// Always serialized; `null` when not provided at registration
    #[schema(example = "steven@tw.com")]
    pub email: Option<String>,
}

/// Registration data accepted by the store (validated upstream)
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
}

/// Login credentials (validated upstream)
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}
