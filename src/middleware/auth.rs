//! Session token validation: the `AuthUser` extractor guarding protected routes.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use tracing::debug;

use crate::auth::Claims;
use crate::error::AppError;
use crate::handlers::http::AppState;

/// Name of the cookie carrying the session token.
pub const TOKEN_COOKIE: &str = "token";

/// Extractor: verified session claims.
///
/// The `token` cookie is tried first. If it is absent or fails validation,
/// an `Authorization: Bearer` token is tried instead. Missing, malformed,
/// forged, or expired tokens reject the request with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub Claims);

#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let cookie_token = CookieJar::from_headers(&parts.headers)
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string());
        let bearer_token =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .ok()
                .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string());

        let mut rejection = None;
        for token in [cookie_token, bearer_token].into_iter().flatten() {
            match state.jwt_secret().validate(&token) {
                Ok(claims) => return Ok(AuthUser(claims)),
                Err(e) => rejection = Some(e),
            }
        }

        Err(match rejection {
            Some(e) => {
                debug!("rejected request: invalid session token");
                e
            }
            None => {
                debug!("rejected request: no session token");
                AppError::Auth("Access denied, no token provided".to_string())
            }
        })
    }
}
