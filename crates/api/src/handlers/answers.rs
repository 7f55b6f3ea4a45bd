//! Handlers for answers: posting, editing, moderation and deletion.
//!
//! Moderation follows [`askhub_core::answer_status`]: only the question
//! owner approves or rejects, rejection deletes the answer, and any edit by
//! the answer owner sends it back to pending.

use askhub_core::content::validate_answer_description;
use askhub_core::error::CoreError;
use askhub_core::types::DbId;
use askhub_db::models::answer::{Answer, CreateAnswer};
use askhub_db::repositories::{AnswerRepo, DeletedCounts};
use askhub_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::ensure_owner;
use crate::handlers::questions::ensure_question_exists;
use crate::middleware::auth::AuthUser;
use crate::notifications::{dispatch, plan_answer_notification};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for posting or editing an answer.
#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub description: String,
}

/// Verify that an answer exists, returning the full row.
pub(crate) async fn ensure_answer_exists(pool: &DbPool, id: DbId) -> AppResult<Answer> {
    AnswerRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))
}

/// Load an answer and check the caller owns its question.
async fn ensure_question_owner(pool: &DbPool, answer_id: DbId, user_id: DbId) -> AppResult<Answer> {
    let answer = ensure_answer_exists(pool, answer_id).await?;
    let question = ensure_question_exists(pool, answer.question_id).await?;
    ensure_owner(
        question.user_id,
        user_id,
        "Only the question author can moderate its answers",
    )?;
    Ok(answer)
}

async fn delete_cascade(pool: &DbPool, id: DbId) -> AppResult<DeletedCounts> {
    AnswerRepo::delete_cascade(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))
}

// ---------------------------------------------------------------------------
// GET/POST /questions/{id}/answers
// ---------------------------------------------------------------------------

/// GET /api/v1/questions/{id}/answers
pub async fn list_for_question(
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_question_exists(&state.pool, question_id).await?;
    let answers = AnswerRepo::list_for_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /api/v1/questions/{id}/answers
///
/// Notifies the question owner (`ANSWERED`) unless they answered
/// themselves.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(question_id): AppPath<DbId>,
    AppJson(input): AppJson<AnswerRequest>,
) -> AppResult<impl IntoResponse> {
    validate_answer_description(&input.description)?;
    let question = ensure_question_exists(&state.pool, question_id).await?;

    let answer = AnswerRepo::create(
        &state.pool,
        &CreateAnswer {
            question_id,
            user_id: auth.user_id,
            description: input.description,
        },
    )
    .await?;
    tracing::info!(answer_id = answer.id, question_id, user_id = auth.user_id, "Answer posted");

    if let Some(notification) =
        plan_answer_notification(auth.user_id, question.user_id, question.id, answer.id)
    {
        dispatch(&state.pool, &[notification]).await;
    }

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

// ---------------------------------------------------------------------------
// /answers/{id}
// ---------------------------------------------------------------------------

/// GET /api/v1/answers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = ensure_answer_exists(&state.pool, id).await?;
    Ok(Json(DataResponse { data: answer }))
}

/// PUT /api/v1/answers/{id}
///
/// Owner-only edit. The answer always returns to pending.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<AnswerRequest>,
) -> AppResult<impl IntoResponse> {
    let answer = ensure_answer_exists(&state.pool, id).await?;
    ensure_owner(answer.user_id, auth.user_id, "Only the author can edit this answer")?;
    validate_answer_description(&input.description)?;

    let next = answer.status()?.after_edit();
    let updated = AnswerRepo::update_description(&state.pool, id, &input.description, next)
        .await?
        .ok_or_else(|| AppError::not_found("Answer", id))?;
    tracing::info!(answer_id = id, status = %next, "Answer edited");

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/answers/{id}
///
/// Owner-only. Removes comments, mentions, votes and notifications with it.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let answer = ensure_answer_exists(&state.pool, id).await?;
    ensure_owner(answer.user_id, auth.user_id, "Only the author can delete this answer")?;

    let counts = delete_cascade(&state.pool, id).await?;
    tracing::info!(
        answer_id = id,
        comments = counts.comments,
        votes = counts.votes,
        notifications = counts.notifications,
        "Answer deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/v1/answers/{id}/approve
pub async fn approve(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let answer = ensure_question_owner(&state.pool, id, auth.user_id).await?;
    answer.status()?.approve()?;

    let approved = AnswerRepo::approve(&state.pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::Conflict("Answer is already approved".to_string()))
    })?;
    tracing::info!(answer_id = id, question_id = approved.question_id, "Answer approved");

    Ok(Json(DataResponse { data: approved }))
}

/// DELETE /api/v1/answers/{id}/reject
///
/// Rejection is not a stored state: the answer and its dependents are
/// deleted. Approved answers cannot be rejected.
pub async fn reject(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let answer = ensure_question_owner(&state.pool, id, auth.user_id).await?;
    answer.status()?.ensure_rejectable()?;

    let counts = delete_cascade(&state.pool, id).await?;
    tracing::info!(
        answer_id = id,
        question_id = answer.question_id,
        comments = counts.comments,
        notifications = counts.notifications,
        "Answer rejected"
    );
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/answers/{id}/mentionable-users
pub async fn mentionable_users(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_answer_exists(&state.pool, id).await?;
    let users = AnswerRepo::mentionable_users(&state.pool, id).await?;
    Ok(Json(DataResponse { data: users }))
}
