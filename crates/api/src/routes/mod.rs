//! Route tree for `/api/v1`.
//!
//! ```text
//! /auth           register, login, refresh, logout, me
//! /questions      list, create, get, update, delete, answers
//! /answers        get, update, delete, approve, reject, comments,
//!                 mentionable-users
//! /votes          cast
//! /notification   inbox, unread-count, mark-all-read, mark one read
//! /search         question search
//! /profile        public profile
//! /admin          content-stats, engagement-metrics, users
//! ```

pub mod admin;
pub mod answers;
pub mod auth;
pub mod health;
pub mod notifications;
pub mod profile;
pub mod questions;
pub mod search;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// All routes mounted under `/api/v1`.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/questions", questions::router())
        .nest("/answers", answers::router())
        .nest("/votes", votes::router())
        .nest("/notification", notifications::router())
        .nest("/search", search::router())
        .nest("/profile", profile::router())
        .nest("/admin", admin::router())
}
