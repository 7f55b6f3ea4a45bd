use axum::routing::{get, post};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// Routes mounted at `/votes`.
///
/// ```text
/// POST   /
/// GET    /{answer_id}
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(votes::cast))
        .route("/{answer_id}", get(votes::current))
}
