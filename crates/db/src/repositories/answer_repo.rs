//! Repository for the `answers` table.

use askhub_core::answer_status::{AnswerStatus, STATUS_APPROVED, STATUS_PENDING};
use askhub_core::types::DbId;
use askhub_core::voting::{VOTE_DOWN, VOTE_UP};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::answer::{Answer, AnswerWithStats, CreateAnswer};
use crate::models::user::UserSummary;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, question_id, user_id, description, status, is_approved, created_at, updated_at";

/// Rows removed by a cascading delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedCounts {
    pub tag_links: u64,
    pub answers: u64,
    pub comments: u64,
    pub mentions: u64,
    pub votes: u64,
    pub notifications: u64,
}

/// Provides CRUD, moderation and cascade-delete operations for answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer. Answers always start out pending.
    pub async fn create(pool: &PgPool, input: &CreateAnswer) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (question_id, user_id, description, status, is_approved)
             VALUES ($1, $2, $3, '{STATUS_PENDING}', false)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(input.user_id)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an answer by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Answers of a question with author, comment count and vote tallies,
    /// ordered by upvotes (desc) then most recently updated.
    pub async fn list_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<AnswerWithStats>, sqlx::Error> {
        let query = format!(
            "SELECT a.id, a.question_id, a.user_id, a.description, a.status, a.is_approved,
                    a.created_at, a.updated_at,
                    u.username, u.image AS user_image,
                    (SELECT COUNT(*) FROM comments c WHERE c.answer_id = a.id) AS comment_count,
                    (SELECT COUNT(*) FROM votes v
                      WHERE v.answer_id = a.id AND v.vote_type = '{VOTE_UP}') AS upvotes,
                    (SELECT COUNT(*) FROM votes v
                      WHERE v.answer_id = a.id AND v.vote_type = '{VOTE_DOWN}') AS downvotes
             FROM answers a
             JOIN users u ON u.id = a.user_id
             WHERE a.question_id = $1
             ORDER BY upvotes DESC, a.updated_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, AnswerWithStats>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// Replace the description and store the post-edit status (see
    /// [`AnswerStatus::after_edit`]).
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update_description(
        pool: &PgPool,
        id: DbId,
        description: &str,
        status: AnswerStatus,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "UPDATE answers SET description = $2, status = $3, is_approved = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .bind(description)
            .bind(status.as_str())
            .bind(status.is_approved())
            .fetch_optional(pool)
            .await
    }

    /// Move a pending answer to approved.
    ///
    /// Returns `None` when the answer is missing or no longer pending, so a
    /// concurrent approval cannot succeed twice.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!(
            "UPDATE answers SET status = '{STATUS_APPROVED}', is_approved = true
             WHERE id = $1 AND status = '{STATUS_PENDING}'
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Users who may be mentioned in a comment on this answer: the question
    /// owner, everyone who answered the question and everyone who already
    /// commented on the answer.
    pub async fn mentionable_users(
        pool: &PgPool,
        answer_id: DbId,
    ) -> Result<Vec<UserSummary>, sqlx::Error> {
        sqlx::query_as::<_, UserSummary>(
            "SELECT u.id, u.username, u.image FROM users u
             WHERE u.id IN (
                 SELECT q.user_id FROM answers a
                 JOIN questions q ON q.id = a.question_id
                 WHERE a.id = $1
                 UNION
                 SELECT other.user_id FROM answers a
                 JOIN answers other ON other.question_id = a.question_id
                 WHERE a.id = $1
                 UNION
                 SELECT c.user_id FROM comments c WHERE c.answer_id = $1
             )
             ORDER BY u.username",
        )
        .bind(answer_id)
        .fetch_all(pool)
        .await
    }

    /// Delete an answer with its comments, mentions, votes and the
    /// notifications that reference any of them, in one transaction.
    ///
    /// Returns `None` if the answer does not exist.
    pub async fn delete_cascade(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeletedCounts>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM answers WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let counts = Self::purge_inner(&mut tx, &[id]).await?;

        tx.commit().await?;
        Ok(Some(counts))
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Remove a set of answers and their dependents within an existing
    /// transaction. Children go before parents: every content foreign key
    /// restricts deletes.
    pub(crate) async fn purge_inner(
        tx: &mut Transaction<'_, Postgres>,
        answer_ids: &[DbId],
    ) -> Result<DeletedCounts, sqlx::Error> {
        let mut counts = DeletedCounts::default();
        if answer_ids.is_empty() {
            return Ok(counts);
        }

        let comment_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT id FROM comments WHERE answer_id = ANY($1)")
                .bind(answer_ids)
                .fetch_all(&mut **tx)
                .await?;

        counts.mentions = sqlx::query("DELETE FROM mentions WHERE comment_id = ANY($1)")
            .bind(&comment_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        // Notifications reference comments and answers, so they go before both.
        counts.notifications = sqlx::query(
            "DELETE FROM notifications WHERE answer_id = ANY($1) OR comment_id = ANY($2)",
        )
        .bind(answer_ids)
        .bind(&comment_ids)
        .execute(&mut **tx)
        .await?
        .rows_affected();

        counts.comments = sqlx::query("DELETE FROM comments WHERE id = ANY($1)")
            .bind(&comment_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        counts.votes = sqlx::query("DELETE FROM votes WHERE answer_id = ANY($1)")
            .bind(answer_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        counts.answers = sqlx::query("DELETE FROM answers WHERE id = ANY($1)")
            .bind(answer_ids)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(counts)
    }
}
