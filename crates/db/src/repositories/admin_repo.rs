//! Read-only aggregate queries for the admin dashboard.

use askhub_core::answer_status::STATUS_APPROVED;
use askhub_core::voting::{VOTE_DOWN, VOTE_UP};
use sqlx::PgPool;

use crate::models::admin::{AdminUserRow, ContentTotals, EngagementMetrics};
use crate::models::tag::TagCount;

pub struct AdminRepo;

impl AdminRepo {
    /// Content totals across the whole site.
    pub async fn content_totals(pool: &PgPool) -> Result<ContentTotals, sqlx::Error> {
        let query = format!(
            "SELECT
                (SELECT COUNT(*) FROM questions) AS total_questions,
                (SELECT COUNT(*) FROM answers) AS total_answers,
                (SELECT COUNT(*) FROM answers WHERE status = '{STATUS_APPROVED}') AS approved_answers,
                (SELECT COUNT(*) FROM comments) AS total_comments,
                (SELECT COUNT(*) FROM questions q
                  WHERE NOT EXISTS (SELECT 1 FROM answers a WHERE a.question_id = q.id))
                    AS unanswered_questions"
        );
        sqlx::query_as::<_, ContentTotals>(&query)
            .fetch_one(pool)
            .await
    }

    /// Most used tags plus vote totals.
    pub async fn engagement_metrics(
        pool: &PgPool,
        top_tags_limit: i64,
    ) -> Result<EngagementMetrics, sqlx::Error> {
        let top_tags = sqlx::query_as::<_, TagCount>(
            "SELECT t.name, COUNT(qt.question_id) AS question_count
             FROM tags t
             JOIN question_tags qt ON qt.tag_id = t.id
             GROUP BY t.id, t.name
             ORDER BY question_count DESC, t.name ASC
             LIMIT $1",
        )
        .bind(top_tags_limit)
        .fetch_all(pool)
        .await?;

        let query = format!(
            "SELECT COUNT(*) FILTER (WHERE vote_type = '{VOTE_UP}'),
                    COUNT(*) FILTER (WHERE vote_type = '{VOTE_DOWN}')
             FROM votes"
        );
        let (total_upvotes, total_downvotes): (i64, i64) =
            sqlx::query_as(&query).fetch_one(pool).await?;

        Ok(EngagementMetrics {
            top_tags,
            total_upvotes,
            total_downvotes,
        })
    }

    /// Users whose username or email contains `pattern` (an `ILIKE`
    /// pattern), newest first, with activity counts.
    pub async fn list_users(
        pool: &PgPool,
        pattern: Option<&str>,
    ) -> Result<Vec<AdminUserRow>, sqlx::Error> {
        sqlx::query_as::<_, AdminUserRow>(
            "SELECT u.id, u.username, u.email, u.role, u.image, u.is_active, u.created_at,
                    (SELECT COUNT(*) FROM questions q WHERE q.user_id = u.id) AS question_count,
                    (SELECT COUNT(*) FROM answers a WHERE a.user_id = u.id) AS answer_count,
                    (SELECT COUNT(*) FROM comments c WHERE c.user_id = u.id) AS comment_count
             FROM users u
             WHERE $1::TEXT IS NULL OR u.username ILIKE $1 OR u.email ILIKE $1
             ORDER BY u.created_at DESC, u.id DESC",
        )
        .bind(pattern)
        .fetch_all(pool)
        .await
    }
}
