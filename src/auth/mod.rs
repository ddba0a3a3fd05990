//! Authentication: register, login, logout, session tokens.

mod handlers;
mod jwt;
mod service;

pub use handlers::{dashboard, login, logout, register, LoginRequest, RegisterRequest};
pub use jwt::{Claims, JwtSecret, SESSION_TTL_SECS};
pub use service::AuthAppService;
