use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

/// Routes mounted at `/notification`.
///
/// ```text
/// GET  /                 inbox (?is_read=&type=)
/// PUT  /mark-all-read
/// GET  /unread-count
/// PUT  /{id}/read
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list))
        .route("/mark-all-read", put(notifications::mark_all_read))
        .route("/unread-count", get(notifications::unread_count))
        .route("/{id}/read", put(notifications::mark_read))
}
