//! Minimal cookie-session authentication backend.
//!
//! Users register with a name, email and password, log in to receive a signed
//! session token (set as an HTTP-only cookie and returned in the body), and
//! present that token to reach protected routes.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;

pub use config::Config;
pub use error::AppError;
pub use handlers::http::AppState;

use axum::routing::{get, post};
use handlers::http;

/// Build the API router (auth routes and health). Used by main and by integration tests.
pub fn create_app(state: AppState) -> axum::Router {
    let auth_routes = axum::Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/dashboard", get(auth::dashboard));

    axum::Router::new()
        .route("/health", get(http::health))
        .nest("/auth", auth_routes)
        .with_state(state)
}
