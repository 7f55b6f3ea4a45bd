//! Notification kinds and message text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

pub const TYPE_ANSWERED: &str = "ANSWERED";
pub const TYPE_COMMENTED: &str = "COMMENTED";
pub const TYPE_MENTIONED: &str = "MENTIONED";

/// Message attached to `ANSWERED` notifications.
pub const ANSWERED_MESSAGE: &str = "Added answer to your question.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationType {
    Answered,
    Commented,
    Mentioned,
}

impl NotificationType {
    /// The value stored in `notifications.notification_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationType::Answered => TYPE_ANSWERED,
            NotificationType::Commented => TYPE_COMMENTED,
            NotificationType::Mentioned => TYPE_MENTIONED,
        }
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotificationType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TYPE_ANSWERED => Ok(NotificationType::Answered),
            TYPE_COMMENTED => Ok(NotificationType::Commented),
            TYPE_MENTIONED => Ok(NotificationType::Mentioned),
            other => Err(CoreError::Validation(format!(
                "Invalid notification type '{other}'. Must be one of: \
                 {TYPE_ANSWERED}, {TYPE_COMMENTED}, {TYPE_MENTIONED}"
            ))),
        }
    }
}

/// Users are never notified about their own activity.
pub fn should_notify(sender_id: DbId, receiver_id: DbId) -> bool {
    sender_id != receiver_id
}

pub fn mentioned_message(sender_username: &str) -> String {
    format!("{sender_username} mentioned you in a comment")
}

pub fn commented_message(sender_username: &str) -> String {
    format!("{sender_username} commented on your answer")
}
