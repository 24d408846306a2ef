//! JSON bodies checked with `validator` before a handler runs

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::response::ApiError;

/// Request body that parsed and passed its field rules
///
/// Unparseable bodies become `INVALID_BODY`, rule violations become
/// `VALIDATION_ERROR` with per-field messages.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                tracing::debug!(reason = %rejection.body_text(), "Rejected request body");
                ApiError::invalid_body(rejection.body_text())
            })?;

        body.validate()?;
        Ok(Self(body))
    }
}
