//! Authentication utilities

mod jwt;
mod password;

pub use jwt::{Claims, JwtService, SessionBinding, TokenPair, TokenType};
pub use password::{hash_password, verify_credentials, verify_password};
