//! Read-only aggregates for the admin dashboard.

use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::tag::TagCount;

/// Raw content totals; the approval rate is derived in the handler.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct ContentTotals {
    pub total_questions: i64,
    pub total_answers: i64,
    pub approved_answers: i64,
    pub total_comments: i64,
    pub unanswered_questions: i64,
}

/// Tag popularity and vote totals.
#[derive(Debug, Clone, Serialize)]
pub struct EngagementMetrics {
    pub top_tags: Vec<TagCount>,
    pub total_upvotes: i64,
    pub total_downvotes: i64,
}

/// A user row in the admin user list, with activity counts.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUserRow {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub role: String,
    pub image: Option<String>,
    pub is_active: bool,
    pub created_at: Timestamp,
    pub question_count: i64,
    pub answer_count: i64,
    pub comment_count: i64,
}
