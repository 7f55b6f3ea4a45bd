use axum::routing::get;
use axum::Router;

use crate::handlers::{answers, questions};
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET, POST          /               list (?page=N), create
/// GET, PUT, DELETE   /{id}           get, update, delete with cascade
/// GET, POST          /{id}/answers   list answers, post an answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(questions::list).post(questions::create))
        .route(
            "/{id}",
            get(questions::get_by_id)
                .put(questions::update)
                .delete(questions::delete),
        )
        .route(
            "/{id}/answers",
            get(answers::list_for_question).post(answers::create),
        )
}
