//! Repository for the `comments` and `mentions` tables.

use std::collections::HashMap;

use askhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{
    Comment, CommentRow, CommentWithMentions, CreateComment, MentionRow,
};
use crate::models::user::UserSummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, answer_id, user_id, content, created_at, updated_at";

/// Provides create, list and delete operations for comments.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a comment together with its mention rows in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO comments (answer_id, user_id, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let comment = sqlx::query_as::<_, Comment>(&query)
            .bind(input.answer_id)
            .bind(input.user_id)
            .bind(&input.content)
            .fetch_one(&mut *tx)
            .await?;

        if !input.mentioned_user_ids.is_empty() {
            sqlx::query(
                "INSERT INTO mentions (comment_id, mentioned_user_id)
                 SELECT $1, UNNEST($2::BIGINT[])
                 ON CONFLICT (comment_id, mentioned_user_id) DO NOTHING",
            )
            .bind(comment.id)
            .bind(&input.mentioned_user_ids)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(comment)
    }

    /// Find a comment by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments WHERE id = $1");
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Ids of the users a comment mentions.
    pub async fn mentioned_user_ids(
        pool: &PgPool,
        comment_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT mentioned_user_id FROM mentions WHERE comment_id = $1
             ORDER BY mentioned_user_id",
        )
        .bind(comment_id)
        .fetch_all(pool)
        .await
    }

    /// Comments on an answer, oldest first, with author and mentioned users.
    pub async fn list_for_answer(
        pool: &PgPool,
        answer_id: DbId,
    ) -> Result<Vec<CommentWithMentions>, sqlx::Error> {
        let rows = sqlx::query_as::<_, CommentRow>(
            "SELECT c.id, c.answer_id, c.user_id, c.content, c.created_at, c.updated_at,
                    u.username, u.image AS user_image
             FROM comments c
             JOIN users u ON u.id = c.user_id
             WHERE c.answer_id = $1
             ORDER BY c.created_at ASC, c.id ASC",
        )
        .bind(answer_id)
        .fetch_all(pool)
        .await?;

        let mention_rows = sqlx::query_as::<_, MentionRow>(
            "SELECT m.comment_id, u.id, u.username, u.image
             FROM mentions m
             JOIN comments c ON c.id = m.comment_id
             JOIN users u ON u.id = m.mentioned_user_id
             WHERE c.answer_id = $1
             ORDER BY u.username",
        )
        .bind(answer_id)
        .fetch_all(pool)
        .await?;

        let mut mentions: HashMap<DbId, Vec<UserSummary>> = HashMap::new();
        for m in mention_rows {
            mentions.entry(m.comment_id).or_default().push(UserSummary {
                id: m.id,
                username: m.username,
                image: m.image,
            });
        }

        Ok(rows
            .into_iter()
            .map(|row| CommentWithMentions {
                id: row.id,
                answer_id: row.answer_id,
                content: row.content,
                created_at: row.created_at,
                updated_at: row.updated_at,
                mentions: mentions.remove(&row.id).unwrap_or_default(),
                author: UserSummary {
                    id: row.user_id,
                    username: row.username,
                    image: row.user_image,
                },
            })
            .collect())
    }

    /// Delete a comment with its mentions and the notifications it produced.
    ///
    /// Returns `true` if the comment existed.
    pub async fn delete_cascade(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM mentions WHERE comment_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM notifications WHERE comment_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
