//! Repository for the `questions` table.
//!
//! Questions own their tag links and, transitively, answers with their
//! comments, mentions, votes and notifications. [`QuestionRepo::delete_cascade`]
//! removes the whole tree in one transaction.

use askhub_core::pagination::Page;
use askhub_core::search::{contains_pattern, SearchType};
use askhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{
    CreateQuestion, Question, QuestionPage, QuestionWithMeta, UpdateQuestion,
};
use crate::repositories::answer_repo::{AnswerRepo, DeletedCounts};
use crate::repositories::tag_repo::TagRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, description, cover_image, created_at, updated_at";

/// Projection for [`QuestionWithMeta`]. Expects `questions q JOIN users u`.
const META_COLUMNS: &str = "q.id, q.user_id, q.title, q.description, q.cover_image, \
    q.created_at, q.updated_at, u.username, u.image AS user_image, \
    ARRAY(SELECT t.name FROM question_tags qt JOIN tags t ON t.id = qt.tag_id \
          WHERE qt.question_id = q.id ORDER BY t.name) AS tags, \
    (SELECT COUNT(*) FROM answers a WHERE a.question_id = q.id) AS answer_count";

const META_FROM: &str = "FROM questions q JOIN users u ON u.id = q.user_id";

/// `WHERE` clause for a search mode; `$1` is the `ILIKE` pattern.
fn search_predicate(search_type: SearchType) -> &'static str {
    match search_type {
        SearchType::Title => "q.title ILIKE $1",
        SearchType::User => "u.username ILIKE $1",
        SearchType::Tag => {
            "EXISTS (SELECT 1 FROM question_tags qt JOIN tags t ON t.id = qt.tag_id \
             WHERE qt.question_id = q.id AND t.name ILIKE $1)"
        }
        SearchType::All => {
            "(q.title ILIKE $1 OR q.description ILIKE $1 OR u.username ILIKE $1 \
             OR EXISTS (SELECT 1 FROM question_tags qt JOIN tags t ON t.id = qt.tag_id \
                        WHERE qt.question_id = q.id AND t.name ILIKE $1))"
        }
    }
}

/// Provides CRUD, search and cascade-delete operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a question and connect its tags in one transaction.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO questions (user_id, title, description, cover_image)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let question = sqlx::query_as::<_, Question>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.cover_image)
            .fetch_one(&mut *tx)
            .await?;

        TagRepo::attach_inner(&mut tx, question.id, &input.tags).await?;

        tx.commit().await?;
        Ok(question)
    }

    /// Find a bare question row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question with owner, tags and answer count.
    pub async fn find_with_meta(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithMeta>, sqlx::Error> {
        let query = format!("SELECT {META_COLUMNS} {META_FROM} WHERE q.id = $1");
        sqlx::query_as::<_, QuestionWithMeta>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of questions, newest first.
    pub async fn list_page(pool: &PgPool, page: Page) -> Result<QuestionPage, sqlx::Error> {
        let query = format!(
            "SELECT {META_COLUMNS} {META_FROM}
             ORDER BY q.created_at DESC, q.id DESC
             LIMIT $1 OFFSET $2"
        );
        let questions = sqlx::query_as::<_, QuestionWithMeta>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM questions")
            .fetch_one(pool)
            .await?;

        Ok(QuestionPage { questions, total })
    }

    /// Case-insensitive substring search, most recently updated first.
    ///
    /// `query` is the trimmed user input; an empty query matches everything.
    pub async fn search(
        pool: &PgPool,
        query: &str,
        search_type: SearchType,
        page: Page,
    ) -> Result<QuestionPage, sqlx::Error> {
        let pattern = contains_pattern(query);
        let predicate = search_predicate(search_type);

        let select = format!(
            "SELECT {META_COLUMNS} {META_FROM}
             WHERE {predicate}
             ORDER BY q.updated_at DESC, q.id DESC
             LIMIT $2 OFFSET $3"
        );
        let questions = sqlx::query_as::<_, QuestionWithMeta>(&select)
            .bind(&pattern)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(pool)
            .await?;

        let count = format!("SELECT COUNT(*) {META_FROM} WHERE {predicate}");
        let total: i64 = sqlx::query_scalar(&count)
            .bind(&pattern)
            .fetch_one(pool)
            .await?;

        Ok(QuestionPage { questions, total })
    }

    /// All questions owned by a user, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<QuestionWithMeta>, sqlx::Error> {
        let query = format!(
            "SELECT {META_COLUMNS} {META_FROM}
             WHERE q.user_id = $1
             ORDER BY q.created_at DESC, q.id DESC"
        );
        sqlx::query_as::<_, QuestionWithMeta>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update title and description and replace the tag set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateQuestion,
    ) -> Result<Option<Question>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE questions SET title = $2, description = $3
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let Some(question) = sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        TagRepo::detach_all_inner(&mut tx, id).await?;
        TagRepo::attach_inner(&mut tx, id, &input.tags).await?;

        tx.commit().await?;
        Ok(Some(question))
    }

    /// Delete a question and everything that hangs off it.
    ///
    /// Runs in one transaction: tag links, then notifications about the
    /// question, then the answer tree (mentions, notifications, comments,
    /// votes, answers), then the question row. Returns `None` if the
    /// question does not exist.
    pub async fn delete_cascade(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<DeletedCounts>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Row locks keep concurrent answers and comments out of the tree
        // while it is being removed.
        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM questions WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let answer_ids: Vec<DbId> =
            sqlx::query_scalar("SELECT id FROM answers WHERE question_id = $1 FOR UPDATE")
                .bind(id)
                .fetch_all(&mut *tx)
                .await?;

        let tags = TagRepo::detach_all_inner(&mut tx, id).await?;

        let question_notifications = sqlx::query("DELETE FROM notifications WHERE question_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        let mut counts = AnswerRepo::purge_inner(&mut tx, &answer_ids).await?;
        counts.tag_links = tags;
        counts.notifications += question_notifications;

        sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(counts))
    }
}
