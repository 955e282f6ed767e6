//! Settings routes: read all tabs, save one tab at a time.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::auth::AuthUser;
use super::validation_error;
use crate::services::settings::{Settings, SettingsTab, SettingsUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub message: String,
    pub settings: Settings,
}

/// `GET /api/settings`: every tab's current values.
pub async fn get_settings(State(state): State<AppState>, _auth: AuthUser) -> Json<Settings> {
    Json(state.settings.read().await.clone())
}

/// `PUT /api/settings/{tab}`: validate and save one tab.
pub async fn save_settings(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(tab): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let Some(tab) = SettingsTab::parse(&tab) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let update = match SettingsUpdate::from_json(tab, body) {
        Ok(update) => update,
        Err(e) => {
            return (StatusCode::UNPROCESSABLE_ENTITY, Json(serde_json::json!({ "error": e.to_string() })))
                .into_response();
        }
    };

    let mut settings = state.settings.write().await;
    match settings.apply(update) {
        Ok(message) => Json(SaveResponse { message, settings: settings.clone() }).into_response(),
        Err(errors) => validation_error(errors),
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
