//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::User;

/// OpenAPI documentation for the user registry
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User Registry",
        version = "0.1.0",
        description = "Minimal user registration/login service with an in-memory store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(user_handler::register, user_handler::login),
    components(schemas(User, user_handler::RegisterRequest)),
    tags(
        (name = "Users", description = "User registration and login")
    )
)]
pub struct ApiDoc;
