//! Handlers for the `/votes` resource.

use askhub_core::types::DbId;
use askhub_core::voting::VoteType;
use askhub_db::models::vote::VoteOutcome;
use askhub_db::repositories::VoteRepo;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::answers::ensure_answer_exists;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Both fields are optional at the serde level so a missing one yields a
/// 400 with a clear message instead of a generic deserialization error.
#[derive(Debug, Deserialize)]
pub struct CastVoteRequest {
    pub answer_id: Option<DbId>,
    pub vote_type: Option<String>,
}

/// POST /api/v1/votes
///
/// Same type twice removes the vote; the other type replaces it. Returns
/// the answer's fresh counts and the caller's resulting vote.
pub async fn cast(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CastVoteRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(answer_id), Some(raw_type)) = (input.answer_id, input.vote_type) else {
        return Err(AppError::BadRequest(
            "answer_id and vote_type are required".to_string(),
        ));
    };
    let vote_type: VoteType = raw_type.parse()?;

    ensure_answer_exists(&state.pool, answer_id).await?;
    let outcome = VoteRepo::cast(&state.pool, auth.user_id, answer_id, vote_type).await?;

    tracing::info!(
        answer_id,
        user_id = auth.user_id,
        requested = %vote_type,
        user_vote = outcome.user_vote.as_deref().unwrap_or("none"),
        upvotes = outcome.upvotes,
        downvotes = outcome.downvotes,
        "Vote cast"
    );
    Ok(Json(DataResponse { data: outcome }))
}

/// GET /api/v1/votes/{answer_id}
///
/// The answer's counts and the caller's current vote, without changing it.
pub async fn current(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(answer_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_answer_exists(&state.pool, answer_id).await?;
    let counts = VoteRepo::counts(&state.pool, answer_id).await?;
    let mine = VoteRepo::find_for_user(&state.pool, auth.user_id, answer_id).await?;

    Ok(Json(DataResponse {
        data: VoteOutcome {
            answer_id,
            upvotes: counts.upvotes,
            downvotes: counts.downvotes,
            user_vote: mine.map(|v| v.vote_type),
        },
    }))
}
