//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON API routes under `/api` authenticate with the `AuthUser` extractor.
//! Page routes sit behind the route guard middleware, which redirects
//! anonymous visitors to `/login` and logged-in visitors away from it.

pub mod auth;
pub mod dashboard;
pub mod pages;
pub mod settings;
pub mod users;

use axum::Router;
use axum::http::StatusCode;
use axum::middleware;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::services::validation::FieldErrors;
use crate::state::AppState;

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/clear-error", post(auth::clear_error))
        .route("/api/auth/session", get(auth::session))
        .route("/api/users", get(users::list_users).post(users::create_user))
        .route("/api/users/stats", get(users::user_stats))
        .route("/api/users/departments", get(users::departments))
        .route("/api/users/{id}", put(users::update_user).delete(users::delete_user))
        .route("/api/dashboard", get(dashboard::overview))
        .route("/api/settings", get(settings::get_settings))
        .route("/api/settings/{tab}", put(settings::save_settings))
        .route("/healthz", get(healthz))
}

fn page_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/login", get(pages::login_page))
        .route("/", get(pages::dashboard_page))
        .route("/users", get(pages::users_page))
        .route("/settings", get(pages::settings_page))
        .fallback(pages::not_found_page)
        .layer(middleware::from_fn_with_state(state, pages::route_guard))
}

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api_routes()
        .merge(page_routes(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// 422 with `{ "errors": { field: message } }`.
pub(crate) fn validation_error(errors: FieldErrors) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!({ "errors": errors }))).into_response()
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
