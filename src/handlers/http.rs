//! HTTP state and health probe.

use axum::{http::StatusCode, Json};
use serde_json::json;
use std::sync::Arc;

use crate::auth::JwtSecret;
use crate::db::UserStore;

/// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub jwt_secret: JwtSecret,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, jwt_secret: JwtSecret) -> Self {
        Self { store, jwt_secret }
    }

    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }

    pub fn jwt_secret(&self) -> &JwtSecret {
        &self.jwt_secret
    }
}

/// GET /health — liveness probe.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "service": "authd" })),
    )
}
