//! Error handling utilities for repositories

use blog_core::error::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Map a unique violation through `on_unique`, which receives the violated
/// constraint name; any other error becomes a database error
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce(Option<&str>) -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique(db_err.constraint());
        }
    }
    map_db_error(e)
}

/// Translate a violated `users` constraint into the matching field error
pub fn user_conflict(constraint: Option<&str>) -> DomainError {
    match constraint {
        Some("users_login_key") => DomainError::LoginAlreadyExists,
        _ => DomainError::EmailAlreadyExists,
    }
}

/// Escape `%`, `_` and `\` so user input is matched literally inside ILIKE
pub fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
