//! Question entity model and DTOs.

use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A question joined with its owner, tag names and answer count.
///
/// Used by listing, detail, search and profile queries.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionWithMeta {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub user_image: Option<String>,
    pub tags: Vec<String>,
    pub answer_count: i64,
}

/// One page of questions plus the total row count before paging.
#[derive(Debug, Clone)]
pub struct QuestionPage {
    pub questions: Vec<QuestionWithMeta>,
    pub total: i64,
}

/// DTO for creating a question. Tags must already be normalized.
#[derive(Debug)]
pub struct CreateQuestion {
    pub user_id: DbId,
    pub title: String,
    pub description: String,
    pub cover_image: Option<String>,
    pub tags: Vec<String>,
}

/// DTO for updating a question. The tag list replaces the existing set.
#[derive(Debug)]
pub struct UpdateQuestion {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}
