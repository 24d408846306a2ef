//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod blogs;
pub mod comments;
pub mod health;
pub mod posts;
pub mod security;
pub mod testing;
pub mod users;
