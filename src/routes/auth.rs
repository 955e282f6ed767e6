//! Auth routes: login, logout, error reset, and the session extractor.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use super::validation_error;
use crate::services::auth::Credentials;
use crate::services::session::{Session, generate_token};
use crate::services::validation;
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "session_token";

/// Non-empty session token from the request cookies.
pub(crate) fn session_token(jar: &CookieJar) -> Option<&str> {
    jar.get(COOKIE_NAME).map(Cookie::value).filter(|t| !t.is_empty())
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

fn cleared_cookie(secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .max_age(Duration::ZERO)
        .build()
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Authenticated user extracted from the session cookie.
/// Use as a handler parameter to require authentication.
pub struct AuthUser {
    pub username: String,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AuthUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = session_token(&jar).ok_or(StatusCode::UNAUTHORIZED)?;

        let app_state = AppState::from_ref(state);
        let session = app_state
            .sessions
            .get(token)
            .await
            .filter(|s| s.authenticated)
            .ok_or(StatusCode::UNAUTHORIZED)?;

        Ok(Self { username: session.username.unwrap_or_default(), token: token.to_owned() })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// Reuse the caller's session if the store knows it, otherwise mint a token
/// the store only keeps if the login succeeds.
async fn resolve_token(state: &AppState, jar: &CookieJar) -> String {
    if let Some(token) = session_token(jar) {
        if state.sessions.get(token).await.is_some() {
            return token.to_owned();
        }
    }
    generate_token()
}

/// `POST /api/auth/login`: check credentials, set the session cookie.
///
/// 200 with the session on success, 401 with the session (carrying
/// `last_error`) on rejection, 422 when the form itself is invalid. The
/// cookie is only set when the store holds the session afterwards.
pub async fn login(State(state): State<AppState>, jar: CookieJar, Json(body): Json<LoginBody>) -> Response {
    if let Err(errors) = validation::validate_login(&body.email, &body.password) {
        return validation_error(errors);
    }

    let token = resolve_token(&state, &jar).await;
    let credentials = Credentials::new(body.email, body.password);
    let session = state.sessions.login(&token, state.auth.as_ref(), &credentials).await;

    let status = if session.authenticated { StatusCode::OK } else { StatusCode::UNAUTHORIZED };
    if state.sessions.get(&token).await.is_none() {
        return (status, Json(session)).into_response();
    }
    let jar = jar.add(session_cookie(token, state.cookie_secure));
    (status, jar, Json(session)).into_response()
}

/// `POST /api/auth/logout`: reset the session, clear the cookie.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = session_token(&jar) {
        state.sessions.logout(token).await;
    }
    let jar = jar.add(cleared_cookie(state.cookie_secure));
    (jar, StatusCode::NO_CONTENT)
}

/// `POST /api/auth/clear-error`: drop the last login error.
pub async fn clear_error(State(state): State<AppState>, jar: CookieJar) -> Json<Session> {
    let session = match session_token(&jar) {
        Some(token) => state.sessions.clear_error(token).await,
        None => Session::new(),
    };
    Json(session)
}

/// `GET /api/auth/session`: current session, logged out when unknown.
pub async fn session(State(state): State<AppState>, jar: CookieJar) -> Json<Session> {
    let session = match session_token(&jar) {
        Some(token) => state.sessions.get(token).await.unwrap_or_default(),
        None => Session::new(),
    };
    Json(session)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
