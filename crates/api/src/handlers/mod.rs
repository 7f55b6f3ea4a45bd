//! HTTP handlers, one module per resource.

pub mod admin;
pub mod answers;
pub mod auth;
pub mod comments;
pub mod notifications;
pub mod profile;
pub mod questions;
pub mod search;
pub mod votes;

use askhub_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Reject the request with 403 unless `user_id` owns the resource.
pub(crate) fn ensure_owner(owner_id: DbId, user_id: DbId, message: &str) -> AppResult<()> {
    if owner_id == user_id {
        Ok(())
    } else {
        Err(AppError::forbidden(message))
    }
}
