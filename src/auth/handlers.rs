//! Auth HTTP handlers: register, login, logout, dashboard.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use validator::Validate;

use crate::auth::AuthAppService;
use crate::db::NewUser;
use crate::error::AppError;
use crate::handlers::http::AppState;
use crate::middleware::auth::{AuthUser, TOKEN_COOKIE};

const REGISTER_FIELDS_REQUIRED: &str = "Name, email and password are required";
const LOGIN_FIELDS_REQUIRED: &str = "Email and password are required";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(required, length(min = 1))]
    pub name: Option<String>,
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(required, length(min = 1))]
    pub email: Option<String>,
    #[validate(required, length(min = 1))]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
}

/// A body that is missing or not JSON counts as having no fields.
fn body_or_default<T: Default>(body: Option<Json<T>>) -> T {
    body.map(|Json(b)| b).unwrap_or_default()
}

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Option<Json<RegisterRequest>>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let body = body_or_default(body);
    body.validate()
        .map_err(|_| AppError::Validation(REGISTER_FIELDS_REQUIRED.to_string()))?;
    let (Some(name), Some(email), Some(password)) = (body.name, body.email, body.password) else {
        return Err(AppError::Validation(REGISTER_FIELDS_REQUIRED.to_string()));
    };

    let password_hash = AuthAppService::hash_password_async(password).await?;
    let user = state
        .store()
        .create_user(NewUser {
            name: &name,
            email: &email,
            password_hash: &password_hash,
        })
        .await?;
    info!(user_id = %user.id, "user registered");

    Ok((StatusCode::CREATED, Json(MessageResponse::new("User created!"))))
}

/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<LoginRequest>>,
) -> Result<(CookieJar, Json<LoginResponse>), AppError> {
    let body = body_or_default(body);
    body.validate()
        .map_err(|_| AppError::Validation(LOGIN_FIELDS_REQUIRED.to_string()))?;
    let (Some(email), Some(password)) = (body.email, body.password) else {
        return Err(AppError::Validation(LOGIN_FIELDS_REQUIRED.to_string()));
    };

    let user = match state.store().find_user_by_email(&email).await? {
        Some(user) => user,
        None => {
            AuthAppService::verify_missing_user_async(password).await?;
            debug!("login rejected: unknown email");
            return Err(AppError::InvalidCredentials);
        }
    };

    if !AuthAppService::verify_password_async(password, user.password_hash.clone()).await? {
        debug!(user_id = %user.id, "login rejected: password mismatch");
        return Err(AppError::InvalidCredentials);
    }

    let token = state.jwt_secret().issue(&user.email, &user.name)?;
    let cookie = Cookie::build((TOKEN_COOKIE, token.clone()))
        .http_only(true)
        .path("/");
    info!(user_id = %user.id, "login succeeded");

    Ok((
        jar.add(cookie),
        Json(LoginResponse {
            message: "Login successful".to_string(),
            token,
        }),
    ))
}

/// POST /auth/logout
///
/// Only the client cookie is cleared; the token itself stays valid until it expires.
pub async fn logout(
    AuthUser(claims): AuthUser,
    jar: CookieJar,
) -> (CookieJar, Json<MessageResponse>) {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/"));
    (
        jar,
        Json(MessageResponse::new(format!("{} Logout successful", claims.name))),
    )
}

/// GET /auth/dashboard
pub async fn dashboard(AuthUser(claims): AuthUser) -> Json<MessageResponse> {
    Json(MessageResponse::new(format!("Welcome {}", claims.name)))
}
