//! User directory routes.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::auth::AuthUser;
use super::validation_error;
use crate::services::directory::{DirectoryError, DirectoryFilter, DirectoryStats, Role, Status, User, UserForm};
use crate::state::AppState;

/// Query string of the directory listing. `all` or absence means "match all".
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    pub department: Option<String>,
}

fn selector(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty() && *v != "all")
}

impl UsersQuery {
    /// # Errors
    ///
    /// Returns `400 Bad Request` for an unknown role or status label.
    pub fn into_filter(self) -> Result<DirectoryFilter, StatusCode> {
        let role = selector(self.role.as_deref())
            .map(|r| Role::parse(r).ok_or(StatusCode::BAD_REQUEST))
            .transpose()?;
        let status = selector(self.status.as_deref())
            .map(|s| Status::parse(s).ok_or(StatusCode::BAD_REQUEST))
            .transpose()?;
        let department = selector(self.department.as_deref()).map(str::to_owned);

        Ok(DirectoryFilter { search: self.search.unwrap_or_default(), role, status, department })
    }
}

#[derive(Debug, Serialize)]
pub struct UserListResponse {
    pub users: Vec<User>,
    /// Matching records.
    pub count: usize,
    /// Records in the whole directory.
    pub total: usize,
    pub filters_active: bool,
}

pub(crate) fn directory_error_response(err: DirectoryError) -> Response {
    match err {
        DirectoryError::NotFound(_) => StatusCode::NOT_FOUND.into_response(),
        DirectoryError::Invalid(errors) => validation_error(errors),
    }
}

/// `GET /api/users`: filtered directory listing.
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<UsersQuery>,
) -> Result<Json<UserListResponse>, StatusCode> {
    let filter = query.into_filter()?;
    let directory = state.directory.read().await;
    let users: Vec<User> = directory.filter(&filter).into_iter().cloned().collect();

    Ok(Json(UserListResponse {
        count: users.len(),
        total: directory.len(),
        filters_active: filter.is_active(),
        users,
    }))
}

/// `POST /api/users`: add a user.
pub async fn create_user(State(state): State<AppState>, _auth: AuthUser, Json(form): Json<UserForm>) -> Response {
    match state.directory.write().await.add(form) {
        Ok(user) => (StatusCode::CREATED, Json(user)).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// `PUT /api/users/{id}`: replace a user's fields.
pub async fn update_user(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<String>,
    Json(form): Json<UserForm>,
) -> Response {
    match state.directory.write().await.update(&id, form) {
        Ok(user) => Json(user).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// `DELETE /api/users/{id}`: remove a user.
pub async fn delete_user(State(state): State<AppState>, _auth: AuthUser, Path(id): Path<String>) -> Response {
    match state.directory.write().await.delete(&id) {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// `GET /api/users/stats`: counts by status.
pub async fn user_stats(State(state): State<AppState>, _auth: AuthUser) -> Json<DirectoryStats> {
    Json(state.directory.read().await.stats())
}

/// `GET /api/users/departments`: department selector options.
pub async fn departments(State(state): State<AppState>, _auth: AuthUser) -> Json<Vec<String>> {
    Json(state.directory.read().await.departments())
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;
