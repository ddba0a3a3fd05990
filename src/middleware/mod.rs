//! Request guards shared by protected routes.

pub mod auth;

pub use auth::{AuthUser, TOKEN_COOKIE};
