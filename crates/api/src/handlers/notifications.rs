//! Handlers for the caller's notification inbox.

use askhub_core::notification::NotificationType;
use askhub_core::types::DbId;
use askhub_db::models::notification::NotificationFilter;
use askhub_db::repositories::NotificationRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::extract::{AppPath, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /notification`.
#[derive(Debug, Default, Deserialize)]
pub struct NotificationQuery {
    pub is_read: Option<bool>,
    #[serde(rename = "type")]
    pub notification_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarkAllReadResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize)]
pub struct UnreadCountResponse {
    pub count: i64,
}

/// GET /api/v1/notification?is_read=&type=
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NotificationQuery>,
) -> AppResult<impl IntoResponse> {
    let notification_type = params
        .notification_type
        .as_deref()
        .filter(|t| !t.is_empty())
        .map(str::parse::<NotificationType>)
        .transpose()?;

    let filter = NotificationFilter {
        is_read: params.is_read,
        notification_type,
    };
    let notifications =
        NotificationRepo::list_for_receiver(&state.pool, auth.user_id, &filter).await?;
    Ok(Json(DataResponse {
        data: notifications,
    }))
}

/// PUT /api/v1/notification/mark-all-read
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let updated = NotificationRepo::mark_all_read(&state.pool, auth.user_id).await?;
    tracing::debug!(user_id = auth.user_id, updated, "Notifications marked read");
    Ok(Json(DataResponse {
        data: MarkAllReadResponse { updated },
    }))
}

/// GET /api/v1/notification/unread-count
pub async fn unread_count(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let count = NotificationRepo::unread_count(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse {
        data: UnreadCountResponse { count },
    }))
}

/// PUT /api/v1/notification/{id}/read
///
/// Another user's notification is reported as missing.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let notification = NotificationRepo::mark_read(&state.pool, id, auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Notification", id))?;
    Ok(Json(DataResponse { data: notification }))
}
