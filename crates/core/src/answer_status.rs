//! Answer moderation state machine.
//!
//! ```text
//!   create ──> pending ──approve──> approved
//!                 │  ^                  │
//!                 │  └──────edit────────┘
//!                 └──reject──> (deleted)
//! ```
//!
//! Only the owner of the answer's question may approve or reject. Rejection
//! is not a persisted state: the answer and everything hanging off it is
//! removed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Stored value for an answer awaiting moderation.
pub const STATUS_PENDING: &str = "pending";

/// Stored value for an answer accepted by the question owner.
pub const STATUS_APPROVED: &str = "approved";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnswerStatus {
    Pending,
    Approved,
}

impl AnswerStatus {
    /// The value stored in `answers.status`.
    pub fn as_str(self) -> &'static str {
        match self {
            AnswerStatus::Pending => STATUS_PENDING,
            AnswerStatus::Approved => STATUS_APPROVED,
        }
    }

    /// Value for the redundant `answers.is_approved` column.
    pub fn is_approved(self) -> bool {
        self == AnswerStatus::Approved
    }

    /// Status after the question owner approves the answer.
    pub fn approve(self) -> Result<AnswerStatus, CoreError> {
        match self {
            AnswerStatus::Pending => Ok(AnswerStatus::Approved),
            AnswerStatus::Approved => {
                Err(CoreError::Conflict("Answer is already approved".to_string()))
            }
        }
    }

    /// Check that the question owner may reject (delete) the answer.
    pub fn ensure_rejectable(self) -> Result<(), CoreError> {
        match self {
            AnswerStatus::Pending => Ok(()),
            AnswerStatus::Approved => Err(CoreError::Conflict(
                "Approved answers cannot be rejected".to_string(),
            )),
        }
    }

    /// Status after the answer owner edits the description. Always pending.
    pub fn after_edit(self) -> AnswerStatus {
        AnswerStatus::Pending
    }
}

impl fmt::Display for AnswerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnswerStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            STATUS_PENDING => Ok(AnswerStatus::Pending),
            STATUS_APPROVED => Ok(AnswerStatus::Approved),
            other => Err(CoreError::Internal(format!(
                "Unknown answer status '{other}' in store"
            ))),
        }
    }
}
