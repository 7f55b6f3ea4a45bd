use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::{answers, comments};
use crate::state::AppState;

/// Routes mounted at `/answers`.
///
/// ```text
/// GET, PUT, DELETE   /{id}
/// PUT                /{id}/approve
/// DELETE             /{id}/reject
/// GET, POST          /{id}/comments
/// DELETE             /{id}/comments/{comment_id}
/// GET                /{id}/mentionable-users
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{id}",
            get(answers::get_by_id)
                .put(answers::update)
                .delete(answers::delete),
        )
        .route("/{id}/approve", put(answers::approve))
        .route("/{id}/reject", delete(answers::reject))
        .route(
            "/{id}/comments",
            get(comments::list_for_answer).post(comments::create),
        )
        .route("/{id}/comments/{comment_id}", delete(comments::delete))
        .route("/{id}/mentionable-users", get(answers::mentionable_users))
}
