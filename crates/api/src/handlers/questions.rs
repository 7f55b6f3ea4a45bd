//! Handlers for the `/questions` resource.

use askhub_core::content::validate_question;
use askhub_core::pagination::{total_pages, Page};
use askhub_core::tags::normalize_tag_list;
use askhub_core::types::DbId;
use askhub_db::models::question::{CreateQuestion, Question, QuestionWithMeta, UpdateQuestion};
use askhub_db::repositories::QuestionRepo;
use askhub_db::DbPool;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::handlers::ensure_owner;
use crate::middleware::auth::AuthUser;
use crate::query::PageParams;
use crate::response::{DataResponse, QuestionListResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub cover_image: Option<String>,
}

/// Request body for `PUT /questions/{id}`. The tag list replaces the
/// current set.
#[derive(Debug, Deserialize)]
pub struct UpdateQuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a question exists, returning the bare row.
pub(crate) async fn ensure_question_exists(pool: &DbPool, id: DbId) -> AppResult<Question> {
    QuestionRepo::find_by_id(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))
}

async fn load_with_meta(pool: &DbPool, id: DbId) -> AppResult<QuestionWithMeta> {
    QuestionRepo::find_with_meta(pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/questions
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    validate_question(&input.title, &input.description)?;
    let tags = normalize_tag_list(&input.tags)?;

    let question = QuestionRepo::create(
        &state.pool,
        &CreateQuestion {
            user_id: auth.user_id,
            title: input.title.trim().to_string(),
            description: input.description,
            cover_image: input.cover_image.filter(|url| !url.trim().is_empty()),
            tags,
        },
    )
    .await?;
    tracing::info!(question_id = question.id, user_id = auth.user_id, "Question created");

    let created = load_with_meta(&state.pool, question.id).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: created })))
}

/// GET /api/v1/questions?page=N
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = Page::new(params.page);
    let result = QuestionRepo::list_page(&state.pool, page).await?;

    Ok(Json(DataResponse {
        data: QuestionListResponse {
            total_pages: total_pages(result.total, page.per_page),
            current_page: page.number,
            total_questions: result.total,
            questions: result.questions,
        },
    }))
}

/// GET /api/v1/questions/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let question = load_with_meta(&state.pool, id).await?;
    Ok(Json(DataResponse { data: question }))
}

/// PUT /api/v1/questions/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateQuestionRequest>,
) -> AppResult<impl IntoResponse> {
    let existing = ensure_question_exists(&state.pool, id).await?;
    ensure_owner(existing.user_id, auth.user_id, "Only the author can edit this question")?;

    validate_question(&input.title, &input.description)?;
    let tags = normalize_tag_list(&input.tags)?;

    QuestionRepo::update(
        &state.pool,
        id,
        &UpdateQuestion {
            title: input.title.trim().to_string(),
            description: input.description,
            tags,
        },
    )
    .await?
    .ok_or_else(|| AppError::not_found("Question", id))?;
    tracing::info!(question_id = id, user_id = auth.user_id, "Question updated");

    let updated = load_with_meta(&state.pool, id).await?;
    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/questions/{id}
///
/// Removes the question with its tags, answers, comments, mentions, votes
/// and notifications in one transaction.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<StatusCode> {
    let existing = ensure_question_exists(&state.pool, id).await?;
    ensure_owner(existing.user_id, auth.user_id, "Only the author can delete this question")?;

    let counts = QuestionRepo::delete_cascade(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("Question", id))?;

    tracing::info!(
        question_id = id,
        user_id = auth.user_id,
        answers = counts.answers,
        comments = counts.comments,
        votes = counts.votes,
        mentions = counts.mentions,
        notifications = counts.notifications,
        "Question deleted"
    );
    Ok(StatusCode::NO_CONTENT)
}
