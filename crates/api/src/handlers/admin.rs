//! Admin dashboard handlers. Every route requires the `admin` role via
//! [`RequireAdmin`].

use askhub_core::search::{contains_pattern, normalize_query};
use askhub_core::stats::{approval_rate, TOP_TAGS_LIMIT};
use askhub_db::models::admin::AdminUserRow;
use askhub_db::repositories::AdminRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ContentStatsResponse {
    pub total_questions: i64,
    pub total_answers: i64,
    pub approved_answers: i64,
    pub total_comments: i64,
    pub unanswered_questions: i64,
    /// Percentage of approved answers, one decimal place.
    pub approval_rate: f64,
}

#[derive(Debug, Default, Deserialize)]
pub struct UserSearchQuery {
    pub search: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminUserListResponse {
    pub users: Vec<AdminUserRow>,
    pub total: usize,
}

/// GET /api/v1/admin/content-stats
pub async fn content_stats(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let totals = AdminRepo::content_totals(&state.pool).await?;
    Ok(Json(DataResponse {
        data: ContentStatsResponse {
            approval_rate: approval_rate(totals.approved_answers, totals.total_answers),
            total_questions: totals.total_questions,
            total_answers: totals.total_answers,
            approved_answers: totals.approved_answers,
            total_comments: totals.total_comments,
            unanswered_questions: totals.unanswered_questions,
        },
    }))
}

/// GET /api/v1/admin/engagement-metrics
pub async fn engagement_metrics(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let metrics = AdminRepo::engagement_metrics(&state.pool, TOP_TAGS_LIMIT).await?;
    Ok(Json(DataResponse { data: metrics }))
}

/// GET /api/v1/admin/users?search=
pub async fn list_users(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<UserSearchQuery>,
) -> AppResult<impl IntoResponse> {
    let search = normalize_query(params.search.as_deref().unwrap_or_default())?;
    let pattern = (!search.is_empty()).then(|| contains_pattern(&search));

    let users = AdminRepo::list_users(&state.pool, pattern.as_deref()).await?;
    tracing::debug!(admin_id = admin.user_id, total = users.len(), "Admin user listing");

    Ok(Json(DataResponse {
        data: AdminUserListResponse {
            total: users.len(),
            users,
        },
    }))
}
