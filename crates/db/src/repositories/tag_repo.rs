//! Repository for the `tags` and `question_tags` tables.

use askhub_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::tag::Tag;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub struct TagRepo;

impl TagRepo {
    /// Find a tag by its normalized name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE name = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Tag names attached to a question, alphabetically.
    pub async fn names_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT t.name FROM question_tags qt
             JOIN tags t ON t.id = qt.tag_id
             WHERE qt.question_id = $1
             ORDER BY t.name",
        )
        .bind(question_id)
        .fetch_all(pool)
        .await
    }

    /// Connect each name to the question, creating missing tags.
    ///
    /// `names` must already be normalized and de-duplicated.
    pub(crate) async fn attach_inner(
        tx: &mut Transaction<'_, Postgres>,
        question_id: DbId,
        names: &[String],
    ) -> Result<(), sqlx::Error> {
        for name in names {
            // DO UPDATE (not DO NOTHING) so RETURNING yields the existing row.
            let tag_id: DbId = sqlx::query_scalar(
                "INSERT INTO tags (name) VALUES ($1)
                 ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
                 RETURNING id",
            )
            .bind(name)
            .fetch_one(&mut **tx)
            .await?;

            sqlx::query(
                "INSERT INTO question_tags (question_id, tag_id) VALUES ($1, $2)
                 ON CONFLICT (question_id, tag_id) DO NOTHING",
            )
            .bind(question_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    /// Remove every tag link of a question. Tags themselves are kept.
    pub(crate) async fn detach_all_inner(
        tx: &mut Transaction<'_, Postgres>,
        question_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM question_tags WHERE question_id = $1")
            .bind(question_id)
            .execute(&mut **tx)
            .await?;
        Ok(result.rows_affected())
    }
}
