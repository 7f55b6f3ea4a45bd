//! Repository for the `votes` table.
//!
//! A user holds at most one vote per answer (`uq_votes_user_answer`).
//! [`VoteRepo::cast`] applies the toggle/switch rules from
//! [`askhub_core::voting`] under a row lock.

use askhub_core::types::DbId;
use askhub_core::voting::{VoteTransition, VoteType, VOTE_DOWN, VOTE_UP};
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::vote::{Vote, VoteCounts, VoteOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, answer_id, vote_type, created_at, updated_at";

fn counts_query() -> String {
    format!(
        "SELECT COUNT(*) FILTER (WHERE vote_type = '{VOTE_UP}') AS upvotes,
                COUNT(*) FILTER (WHERE vote_type = '{VOTE_DOWN}') AS downvotes
         FROM votes WHERE answer_id = $1"
    )
}

pub struct VoteRepo;

impl VoteRepo {
    /// Cast a vote on an answer, toggling or switching an existing one.
    ///
    /// The caller must have checked that the answer exists.
    pub async fn cast(
        pool: &PgPool,
        user_id: DbId,
        answer_id: DbId,
        requested: VoteType,
    ) -> Result<VoteOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let existing: Option<String> = sqlx::query_scalar(
            "SELECT vote_type FROM votes WHERE user_id = $1 AND answer_id = $2 FOR UPDATE",
        )
        .bind(user_id)
        .bind(answer_id)
        .fetch_optional(&mut *tx)
        .await?;

        // The check constraint guarantees stored values parse.
        let existing = existing.and_then(|v| v.parse::<VoteType>().ok());
        let transition = VoteTransition::resolve(existing, requested);

        match transition {
            VoteTransition::Create(vote_type) | VoteTransition::Switch(vote_type) => {
                // Two first votes racing both miss the lock above; the upsert
                // keeps the pair unique and the last writer wins.
                sqlx::query(
                    "INSERT INTO votes (user_id, answer_id, vote_type) VALUES ($1, $2, $3)
                     ON CONFLICT (user_id, answer_id) DO UPDATE SET vote_type = EXCLUDED.vote_type",
                )
                .bind(user_id)
                .bind(answer_id)
                .bind(vote_type.as_str())
                .execute(&mut *tx)
                .await?;
            }
            VoteTransition::Remove => {
                sqlx::query("DELETE FROM votes WHERE user_id = $1 AND answer_id = $2")
                    .bind(user_id)
                    .bind(answer_id)
                    .execute(&mut *tx)
                    .await?;
            }
        }

        let counts = Self::counts_inner(&mut tx, answer_id).await?;
        tx.commit().await?;

        Ok(VoteOutcome {
            answer_id,
            upvotes: counts.upvotes,
            downvotes: counts.downvotes,
            user_vote: transition.resulting_vote().map(|v| v.as_str().to_string()),
        })
    }

    /// Up/down counts for an answer.
    pub async fn counts(pool: &PgPool, answer_id: DbId) -> Result<VoteCounts, sqlx::Error> {
        sqlx::query_as::<_, VoteCounts>(&counts_query())
            .bind(answer_id)
            .fetch_one(pool)
            .await
    }

    /// The caller's vote on an answer, if any.
    pub async fn find_for_user(
        pool: &PgPool,
        user_id: DbId,
        answer_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM votes WHERE user_id = $1 AND answer_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(answer_id)
            .fetch_optional(pool)
            .await
    }

    async fn counts_inner(
        tx: &mut Transaction<'_, Postgres>,
        answer_id: DbId,
    ) -> Result<VoteCounts, sqlx::Error> {
        sqlx::query_as::<_, VoteCounts>(&counts_query())
            .bind(answer_id)
            .fetch_one(&mut **tx)
            .await
    }
}
