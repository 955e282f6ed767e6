//! Page routes and the route guard middleware.
//!
//! DESIGN
//! ======
//! Pages answer with a small JSON view model (page id, title, signed-in user,
//! sidebar links) that a front end renders; the data behind each page comes
//! from the `/api` routes. Every page request first passes `route_guard`.

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;
use tracing::debug;

use super::auth::{AuthUser, session_token};
use crate::services::guard::{self, Navigation};
use crate::state::AppState;

/// Sidebar entries: path and label.
const NAV: [(&str, &str); 3] = [("/", "Dashboard"), ("/users", "Users"), ("/settings", "Settings")];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub path: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub page: &'static str,
    pub title: &'static str,
    pub username: Option<String>,
    pub nav: Vec<NavLink>,
}

fn layout(page: &'static str, title: &'static str, current: &str, auth: AuthUser) -> PageView {
    let nav = NAV
        .iter()
        .map(|&(path, label)| NavLink { path, label, active: path == current })
        .collect();
    PageView { page, title, username: Some(auth.username), nav }
}

/// Redirect navigation according to the current session before any page
/// handler runs.
pub async fn route_guard(State(state): State<AppState>, jar: CookieJar, request: Request, next: Next) -> Response {
    let authenticated = match session_token(&jar) {
        Some(token) => state.sessions.is_authenticated(token).await,
        None => false,
    };

    match guard::guard(request.uri().path(), authenticated) {
        Navigation::Proceed => next.run(request).await,
        Navigation::Redirect(to) => {
            debug!(path = %request.uri().path(), %to, "route guard redirect");
            Redirect::temporary(to).into_response()
        }
    }
}

/// `GET /login`
pub async fn login_page() -> Json<PageView> {
    Json(PageView { page: "login", title: "Login", username: None, nav: Vec::new() })
}

/// `GET /`
pub async fn dashboard_page(auth: AuthUser) -> Json<PageView> {
    Json(layout("dashboard", "Dashboard", "/", auth))
}

/// `GET /users`
pub async fn users_page(auth: AuthUser) -> Json<PageView> {
    Json(layout("users", "Users", "/users", auth))
}

/// `GET /settings`
pub async fn settings_page(auth: AuthUser) -> Json<PageView> {
    Json(layout("settings", "Settings", "/settings", auth))
}

/// Fallback for unknown paths inside the layout.
pub async fn not_found_page(auth: AuthUser) -> (StatusCode, Json<PageView>) {
    (StatusCode::NOT_FOUND, Json(layout("not_found", "Page not found", "", auth)))
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
