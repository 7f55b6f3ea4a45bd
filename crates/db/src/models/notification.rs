//! Notification entity model and DTOs.

use askhub_core::notification::NotificationType;
use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub notification_type: String,
    pub message: String,
    pub is_read: bool,
    pub question_id: Option<DbId>,
    pub answer_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A notification joined with its sender, for the inbox listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NotificationWithSender {
    pub id: DbId,
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub notification_type: String,
    pub message: String,
    pub is_read: bool,
    pub question_id: Option<DbId>,
    pub answer_id: Option<DbId>,
    pub comment_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub sender_username: String,
    pub sender_image: Option<String>,
}

/// DTO for inserting a notification.
#[derive(Debug, Clone)]
pub struct CreateNotification {
    pub sender_id: DbId,
    pub receiver_id: DbId,
    pub notification_type: NotificationType,
    pub message: String,
    pub question_id: Option<DbId>,
    pub answer_id: Option<DbId>,
    pub comment_id: Option<DbId>,
}

/// Filters for the inbox listing. `None` means "don't filter".
#[derive(Debug, Clone, Default)]
pub struct NotificationFilter {
    pub is_read: Option<bool>,
    pub notification_type: Option<NotificationType>,
}
