//! Authentication Module
//!
//! Handles JWT token generation/validation, argon2 password hashing,
//! and the bearer-token middleware for the admin API.

mod jwt;
mod middleware;
mod password;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
pub use password::{hash_password, verify_password};
