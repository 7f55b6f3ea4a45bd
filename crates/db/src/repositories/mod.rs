//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Multi-row writes (cascades,
//! comment + mentions, vote toggles) open their own transaction.

pub mod admin_repo;
pub mod answer_repo;
pub mod comment_repo;
pub mod notification_repo;
pub mod question_repo;
pub mod session_repo;
pub mod tag_repo;
pub mod user_repo;
pub mod vote_repo;

pub use admin_repo::AdminRepo;
pub use answer_repo::{AnswerRepo, DeletedCounts};
pub use comment_repo::CommentRepo;
pub use notification_repo::NotificationRepo;
pub use question_repo::QuestionRepo;
pub use session_repo::SessionRepo;
pub use tag_repo::TagRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
