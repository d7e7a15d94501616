//! User registration and login handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::{ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::validation::{check_email, require_password, require_username};
use crate::domain::{Credentials, FieldError, NewUser, User, ValidateFields};
use crate::errors::AppResult;

/// User registration request.
///
/// Fields are optional at the decode layer so absence is reported as a
/// missing-field violation rather than a decode failure.
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Username, 3-10 letters, digits or underscores
    #[schema(example = "steven_123")]
    pub username: Option<String>,
    /// Password, 5-12 characters
    #[schema(example = "abcde12345")]
    pub password: Option<String>,
    /// Email address
    #[schema(example = "steven@tw.com")]
    pub email: Option<String>,
}

impl ValidateFields for RegisterRequest {
    type Valid = NewUser;

    fn validate_fields(self) -> Result<NewUser, FieldError> {
        let username = require_username(self.username)?;
        let password = require_password(self.password)?;
        let email = check_email(self.email)?;

        Ok(NewUser {
            username,
            password,
            email,
        })
    }
}

/// Login query parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginQuery {
    /// Username, 3-10 letters, digits or underscores
    pub username: Option<String>,
    /// Password, 5-12 characters
    pub password: Option<String>,
}

impl ValidateFields for LoginQuery {
    type Valid = Credentials;

    fn validate_fields(self) -> Result<Credentials, FieldError> {
        let username = require_username(self.username)?;
        let password = require_password(self.password)?;

        Ok(Credentials { username, password })
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", get(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation failure or username already taken")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(new_user): ValidatedJson<RegisterRequest>,
) -> AppResult<StatusCode> {
    state.user_service.register(new_user).await?;

    Ok(StatusCode::CREATED)
}

/// Login with username and password
#[utoipa::path(
    get,
    path = "/login",
    tag = "Users",
    params(LoginQuery),
    responses(
        (status = 200, description = "Matched user", body = User),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Unknown username or wrong password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedQuery(credentials): ValidatedQuery<LoginQuery>,
) -> AppResult<Json<User>> {
    let user = state.user_service.authenticate(credentials).await?;

    Ok(Json(user))
}
