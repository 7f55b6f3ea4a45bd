//! Tag entity model.

use askhub_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A tag with the number of questions carrying it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagCount {
    pub name: String,
    pub question_count: i64,
}
