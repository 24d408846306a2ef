//! Axum extractors for request handling
//!
//! Custom extractors for authentication, validation, paging and ids.

mod auth;
mod pagination;
mod path;
mod validated;

pub use auth::{AdminUser, AuthUser, MaybeAuthUser, RefreshSession, REFRESH_COOKIE};
pub use pagination::PageParams;
pub use path::IdPath;
pub use validated::ValidatedJson;
