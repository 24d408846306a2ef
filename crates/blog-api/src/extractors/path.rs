//! Path parameter extractors
//!
//! Type-safe extraction of Snowflake IDs from path parameters. An id that
//! cannot name an existing resource is reported as 404.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use blog_core::Snowflake;

use crate::response::ApiError;

/// The single `:id` segment of a route
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub Snowflake);

#[async_trait]
impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        raw.parse().map(IdPath).map_err(|_| ApiError::NotFound)
    }
}
