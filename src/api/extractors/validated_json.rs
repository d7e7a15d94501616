//! Validated JSON extractor - Combines deserialization with field validation.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;

use crate::domain::ValidateFields;
use crate::errors::AppError;

/// JSON extractor that runs the declared field checks before the handler.
///
/// The wrapped value is the *validated* form of `T`, so handlers never see
/// raw input. A body that cannot be decoded at all is rejected with the
/// generic bad-input error.
///
/// # Example
///
/// ```rust,ignore
/// async fn register(ValidatedJson(new_user): ValidatedJson<RegisterRequest>) {
///     // new_user is the checked domain value
/// }
/// ```
pub struct ValidatedJson<T: ValidateFields>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::MalformedInput)?;

        Ok(ValidatedJson(value.validate_fields()?))
    }
}
