//! Entity to model mappers
//!
//! Conversions from database rows (`*Model`) to domain entities (blog-core).

mod content;
mod user;
