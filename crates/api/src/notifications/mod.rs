//! Notification fan-out for answers and comments.
//!
//! Handlers call the `plan_*` functions to decide who hears about an event,
//! then hand the result to [`dispatch`] after the triggering write has
//! committed. Delivery is best-effort: a failed insert is logged and never
//! fails the request.

mod plan;

pub use plan::{plan_answer_notification, plan_comment_notifications, CommentEvent};

use askhub_db::models::notification::CreateNotification;
use askhub_db::repositories::NotificationRepo;
use askhub_db::DbPool;

/// Insert the planned notifications, logging failures at `warn`.
///
/// Returns the number of notifications stored.
pub async fn dispatch(pool: &DbPool, notifications: &[CreateNotification]) -> usize {
    let mut delivered = 0;
    for notification in notifications {
        match NotificationRepo::create(pool, notification).await {
            Ok(row) => {
                delivered += 1;
                tracing::debug!(
                    notification_id = row.id,
                    receiver_id = row.receiver_id,
                    notification_type = %row.notification_type,
                    "Notification stored"
                );
            }
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    sender_id = notification.sender_id,
                    receiver_id = notification.receiver_id,
                    notification_type = %notification.notification_type,
                    "Failed to store notification"
                );
            }
        }
    }
    delivered
}
