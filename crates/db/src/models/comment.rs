//! Comment and mention models.

use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

use crate::models::user::UserSummary;

/// A row from the `comments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub answer_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A comment joined with its author.
#[derive(Debug, Clone, FromRow)]
pub struct CommentRow {
    pub id: DbId,
    pub answer_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub username: String,
    pub user_image: Option<String>,
}

/// A mentioned user, tagged with the comment that mentions them.
#[derive(Debug, Clone, FromRow)]
pub struct MentionRow {
    pub comment_id: DbId,
    pub id: DbId,
    pub username: String,
    pub image: Option<String>,
}

/// Comment as returned by the API: author plus the users it mentions.
#[derive(Debug, Clone, Serialize)]
pub struct CommentWithMentions {
    pub id: DbId,
    pub answer_id: DbId,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub author: UserSummary,
    pub mentions: Vec<UserSummary>,
}

/// DTO for creating a comment. `mentioned_user_ids` must be de-duplicated
/// and refer to existing users.
#[derive(Debug)]
pub struct CreateComment {
    pub answer_id: DbId,
    pub user_id: DbId,
    pub content: String,
    pub mentioned_user_ids: Vec<DbId>,
}
