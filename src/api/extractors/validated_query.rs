//! Validated query extractor - query-string counterpart of `ValidatedJson`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::domain::ValidateFields;
use crate::errors::AppError;

/// Query extractor that runs the declared field checks before the handler.
pub struct ValidatedQuery<T: ValidateFields>(pub T::Valid);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned + ValidateFields,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::MalformedInput)?;

        Ok(ValidatedQuery(value.validate_fields()?))
    }
}
