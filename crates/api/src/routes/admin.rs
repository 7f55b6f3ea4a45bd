use axum::routing::get;
use axum::Router;

use crate::handlers::admin;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires the admin role.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/content-stats", get(admin::content_stats))
        .route("/engagement-metrics", get(admin::engagement_metrics))
        .route("/users", get(admin::list_users))
}
