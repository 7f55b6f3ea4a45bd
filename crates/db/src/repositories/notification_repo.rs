//! Repository for the `notifications` table.

use askhub_core::types::DbId;
use sqlx::PgPool;

use crate::models::notification::{
    CreateNotification, Notification, NotificationFilter, NotificationWithSender,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, sender_id, receiver_id, notification_type, message, is_read, \
    question_id, answer_id, comment_id, created_at, updated_at";

/// Provides inbox operations for notifications.
pub struct NotificationRepo;

impl NotificationRepo {
    /// Insert a notification, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateNotification,
    ) -> Result<Notification, sqlx::Error> {
        let query = format!(
            "INSERT INTO notifications
                (sender_id, receiver_id, notification_type, message,
                 question_id, answer_id, comment_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(input.sender_id)
            .bind(input.receiver_id)
            .bind(input.notification_type.as_str())
            .bind(&input.message)
            .bind(input.question_id)
            .bind(input.answer_id)
            .bind(input.comment_id)
            .fetch_one(pool)
            .await
    }

    /// The receiver's inbox, newest first, with sender info.
    pub async fn list_for_receiver(
        pool: &PgPool,
        receiver_id: DbId,
        filter: &NotificationFilter,
    ) -> Result<Vec<NotificationWithSender>, sqlx::Error> {
        sqlx::query_as::<_, NotificationWithSender>(
            "SELECT n.id, n.sender_id, n.receiver_id, n.notification_type, n.message,
                    n.is_read, n.question_id, n.answer_id, n.comment_id,
                    n.created_at, n.updated_at,
                    u.username AS sender_username, u.image AS sender_image
             FROM notifications n
             JOIN users u ON u.id = n.sender_id
             WHERE n.receiver_id = $1
               AND ($2::BOOLEAN IS NULL OR n.is_read = $2)
               AND ($3::TEXT IS NULL OR n.notification_type = $3)
             ORDER BY n.created_at DESC, n.id DESC",
        )
        .bind(receiver_id)
        .bind(filter.is_read)
        .bind(filter.notification_type.map(|t| t.as_str()))
        .fetch_all(pool)
        .await
    }

    /// Mark every unread notification of the receiver as read.
    /// Returns the number of rows updated.
    pub async fn mark_all_read(pool: &PgPool, receiver_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE notifications SET is_read = true
             WHERE receiver_id = $1 AND is_read = false",
        )
        .bind(receiver_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Mark one of the receiver's notifications as read.
    ///
    /// Returns `None` if the notification does not exist or belongs to
    /// someone else.
    pub async fn mark_read(
        pool: &PgPool,
        id: DbId,
        receiver_id: DbId,
    ) -> Result<Option<Notification>, sqlx::Error> {
        let query = format!(
            "UPDATE notifications SET is_read = true
             WHERE id = $1 AND receiver_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notification>(&query)
            .bind(id)
            .bind(receiver_id)
            .fetch_optional(pool)
            .await
    }

    /// Count of unread notifications for the receiver.
    pub async fn unread_count(pool: &PgPool, receiver_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE receiver_id = $1 AND is_read = false",
        )
        .bind(receiver_id)
        .fetch_one(pool)
        .await
    }
}
