//! Dashboard overview route.

use axum::response::Json;

use super::auth::AuthUser;
use crate::services::dashboard::{self, DashboardOverview};

/// `GET /api/dashboard`: stat cards, recent sales, revenue series.
pub async fn overview(_auth: AuthUser) -> Json<DashboardOverview> {
    Json(dashboard::overview())
}
