//! Handlers for comments on answers.
//!
//! Posting a comment resolves its mentions, stores comment and mention rows
//! in one transaction, then fans out `MENTIONED` / `COMMENTED`
//! notifications.

use askhub_core::content::validate_comment_content;
use askhub_core::error::CoreError;
use askhub_core::mentions::{extract_handles, merge_mention_ids, MAX_MENTIONS_PER_COMMENT};
use askhub_core::types::DbId;
use askhub_db::models::comment::{CommentWithMentions, CreateComment};
use askhub_db::repositories::{CommentRepo, UserRepo};
use askhub_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::handlers::answers::ensure_answer_exists;
use crate::handlers::ensure_owner;
use crate::middleware::auth::AuthUser;
use crate::notifications::{dispatch, plan_comment_notifications, CommentEvent};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /answers/{id}/comments`.
#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub content: String,
    /// Ids picked in the editor's mention list. Inline `@handles` in
    /// `content` are resolved as well.
    #[serde(default)]
    pub mentioned_user_ids: Vec<DbId>,
}

/// Effective mention set: explicit ids plus resolved `@handles`, restricted
/// to existing users.
async fn resolve_mentions(
    pool: &DbPool,
    content: &str,
    explicit: &[DbId],
) -> AppResult<Vec<DbId>> {
    let handles = extract_handles(content);
    let resolved = UserRepo::find_ids_by_usernames(pool, &handles).await?;
    let existing = UserRepo::filter_existing_ids(pool, explicit).await?;

    let ids = merge_mention_ids(&existing, &resolved);
    if ids.len() > MAX_MENTIONS_PER_COMMENT {
        return Err(AppError::Core(CoreError::Validation(format!(
            "A comment may mention at most {MAX_MENTIONS_PER_COMMENT} users"
        ))));
    }
    Ok(ids)
}

/// GET /api/v1/answers/{id}/comments
pub async fn list_for_answer(
    State(state): State<AppState>,
    AppPath(answer_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_answer_exists(&state.pool, answer_id).await?;
    let comments = CommentRepo::list_for_answer(&state.pool, answer_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

/// POST /api/v1/answers/{id}/comments
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(answer_id): AppPath<DbId>,
    AppJson(input): AppJson<CreateCommentRequest>,
) -> AppResult<impl IntoResponse> {
    validate_comment_content(&input.content)?;
    let answer = ensure_answer_exists(&state.pool, answer_id).await?;
    let mentioned = resolve_mentions(&state.pool, &input.content, &input.mentioned_user_ids).await?;

    let comment = CommentRepo::create(
        &state.pool,
        &CreateComment {
            answer_id,
            user_id: auth.user_id,
            content: input.content,
            mentioned_user_ids: mentioned.clone(),
        },
    )
    .await?;

    let author = UserRepo::find_summaries(&state.pool, &[auth.user_id])
        .await?
        .pop()
        .ok_or_else(|| AppError::not_found("User", auth.user_id))?;
    let mut mentions = UserRepo::find_summaries(&state.pool, &mentioned).await?;
    mentions.sort_by(|a, b| a.username.cmp(&b.username));

    tracing::info!(
        comment_id = comment.id,
        answer_id,
        user_id = auth.user_id,
        mentions = mentioned.len(),
        "Comment posted"
    );

    let event = CommentEvent {
        author_id: auth.user_id,
        author_username: &author.username,
        comment_id: comment.id,
        answer_id,
        answer_owner_id: answer.user_id,
        question_id: answer.question_id,
    };
    dispatch(&state.pool, &plan_comment_notifications(&event, &mentioned)).await;

    let body = CommentWithMentions {
        id: comment.id,
        answer_id: comment.answer_id,
        content: comment.content,
        created_at: comment.created_at,
        updated_at: comment.updated_at,
        author,
        mentions,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: body })))
}

/// DELETE /api/v1/answers/{id}/comments/{comment_id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((answer_id, comment_id)): AppPath<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    let comment = CommentRepo::find_by_id(&state.pool, comment_id)
        .await?
        .filter(|c| c.answer_id == answer_id)
        .ok_or_else(|| AppError::not_found("Comment", comment_id))?;
    ensure_owner(comment.user_id, auth.user_id, "Only the author can delete this comment")?;

    let mentioned = CommentRepo::mentioned_user_ids(&state.pool, comment_id).await?;
    if !CommentRepo::delete_cascade(&state.pool, comment_id).await? {
        return Err(AppError::not_found("Comment", comment_id));
    }
    tracing::info!(
        comment_id,
        answer_id,
        user_id = auth.user_id,
        mentions = mentioned.len(),
        "Comment deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
