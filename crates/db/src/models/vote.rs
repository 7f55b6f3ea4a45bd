//! Vote entity model.

use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub answer_id: DbId,
    pub vote_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Up/down counts for an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct VoteCounts {
    pub upvotes: i64,
    pub downvotes: i64,
}

/// Result of casting a vote: the fresh counts plus the caller's vote after
/// the transition (`None` after a toggle-off).
#[derive(Debug, Clone, Serialize)]
pub struct VoteOutcome {
    pub answer_id: DbId,
    pub upvotes: i64,
    pub downvotes: i64,
    pub user_vote: Option<String>,
}
