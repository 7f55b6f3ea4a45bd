//! Handler for public user profiles.

use askhub_core::types::DbId;
use askhub_db::models::question::QuestionWithMeta;
use askhub_db::models::user::PublicProfile;
use askhub_db::repositories::{QuestionRepo, UserRepo};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppPath;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: PublicProfile,
    pub questions: Vec<QuestionWithMeta>,
}

/// GET /api/v1/profile/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    AppPath(user_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find_profile(&state.pool, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("User", user_id))?;
    let questions = QuestionRepo::list_by_user(&state.pool, user_id).await?;

    Ok(Json(DataResponse {
        data: ProfileResponse { user, questions },
    }))
}
