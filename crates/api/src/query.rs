//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination (`?page=N`). Missing or non-positive pages resolve to 1
/// via [`askhub_core::pagination::Page::new`].
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
