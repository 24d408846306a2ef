//! # blog-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod mailer;
pub mod services;

pub use dto::*;
pub use mailer::LogMailer;
pub use services::*;
