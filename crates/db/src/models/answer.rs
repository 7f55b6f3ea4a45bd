//! Answer entity model and DTOs.

use askhub_core::answer_status::AnswerStatus;
use askhub_core::error::CoreError;
use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub status: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Answer {
    /// Parse the stored status column.
    pub fn status(&self) -> Result<AnswerStatus, CoreError> {
        self.status.parse()
    }
}

/// An answer joined with its author, comment count and vote tallies.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerWithStats {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub description: String,
    pub status: String,
    pub is_approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub user_image: Option<String>,
    pub comment_count: i64,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// DTO for creating an answer. New answers always start pending.
#[derive(Debug)]
pub struct CreateAnswer {
    pub question_id: DbId,
    pub user_id: DbId,
    pub description: String,
}
