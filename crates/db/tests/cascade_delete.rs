//! Cascading deletes for questions, answers and comments.
//!
//! Every content foreign key restricts deletes, so these tests fail loudly
//! if a cascade forgets a child table or removes rows in the wrong order.

mod common;

use askhub_core::notification::NotificationType;
use askhub_core::voting::VoteType;
use askhub_db::models::notification::CreateNotification;
use askhub_db::repositories::{
    AnswerRepo, CommentRepo, NotificationRepo, QuestionRepo, VoteRepo,
};
use common::count;
use sqlx::PgPool;

async fn notify(
    pool: &PgPool,
    sender: i64,
    receiver: i64,
    kind: NotificationType,
    question_id: Option<i64>,
    answer_id: Option<i64>,
    comment_id: Option<i64>,
) {
    NotificationRepo::create(
        pool,
        &CreateNotification {
            sender_id: sender,
            receiver_id: receiver,
            notification_type: kind,
            message: "msg".to_string(),
            question_id,
            answer_id,
            comment_id,
        },
    )
    .await
    .unwrap();
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_question_removes_whole_tree(pool: PgPool) {
    let owner = common::user(&pool, "owner").await;
    let answerer = common::user(&pool, "answerer").await;
    let commenter = common::user(&pool, "commenter").await;

    let q = common::question(&pool, owner.id, "How do lifetimes work", &["rust", "lifetimes"]).await;

    // N = 3 answers, M = 2 comments each, every comment mentions the owner.
    for _ in 0..3 {
        let a = common::answer(&pool, q.id, answerer.id).await;
        notify(&pool, answerer.id, owner.id, NotificationType::Answered, Some(q.id), Some(a.id), None).await;
        VoteRepo::cast(&pool, owner.id, a.id, VoteType::Up).await.unwrap();
        VoteRepo::cast(&pool, commenter.id, a.id, VoteType::Down).await.unwrap();
        for _ in 0..2 {
            let c = common::comment(&pool, a.id, commenter.id, vec![owner.id]).await;
            notify(&pool, commenter.id, owner.id, NotificationType::Mentioned, None, Some(a.id), Some(c.id)).await;
        }
    }

    // Content on another question must survive.
    let other = common::question(&pool, owner.id, "Unrelated", &["rust"]).await;
    let other_answer = common::answer(&pool, other.id, answerer.id).await;
    common::comment(&pool, other_answer.id, commenter.id, vec![]).await;

    let counts = QuestionRepo::delete_cascade(&pool, q.id).await.unwrap().unwrap();
    assert_eq!(counts.answers, 3);
    assert_eq!(counts.comments, 6);
    assert_eq!(counts.mentions, 6);
    assert_eq!(counts.votes, 6);
    assert_eq!(counts.notifications, 9);
    assert_eq!(counts.tag_links, 2);

    assert!(QuestionRepo::find_by_id(&pool, q.id).await.unwrap().is_none());
    assert_eq!(count(&pool, "answers").await, 1);
    assert_eq!(count(&pool, "comments").await, 1);
    assert_eq!(count(&pool, "votes").await, 0);
    assert_eq!(count(&pool, "mentions").await, 0);
    assert_eq!(count(&pool, "notifications").await, 0);
    assert_eq!(count(&pool, "question_tags").await, 1);
    // Tags themselves are shared and kept.
    assert_eq!(count(&pool, "tags").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_missing_question_returns_none(pool: PgPool) {
    assert!(QuestionRepo::delete_cascade(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_answer_removes_comments_votes_and_notifications(pool: PgPool) {
    let owner = common::user(&pool, "owner").await;
    let answerer = common::user(&pool, "answerer").await;
    let q = common::question(&pool, owner.id, "Borrowck", &[]).await;
    let doomed = common::answer(&pool, q.id, answerer.id).await;
    let kept = common::answer(&pool, q.id, answerer.id).await;

    let c = common::comment(&pool, doomed.id, owner.id, vec![answerer.id]).await;
    notify(&pool, owner.id, answerer.id, NotificationType::Mentioned, None, Some(doomed.id), Some(c.id)).await;
    notify(&pool, answerer.id, owner.id, NotificationType::Answered, Some(q.id), Some(doomed.id), None).await;
    notify(&pool, answerer.id, owner.id, NotificationType::Answered, Some(q.id), Some(kept.id), None).await;
    VoteRepo::cast(&pool, owner.id, doomed.id, VoteType::Up).await.unwrap();
    common::comment(&pool, kept.id, owner.id, vec![]).await;

    let counts = AnswerRepo::delete_cascade(&pool, doomed.id).await.unwrap().unwrap();
    assert_eq!(counts.answers, 1);
    assert_eq!(counts.comments, 1);
    assert_eq!(counts.mentions, 1);
    assert_eq!(counts.votes, 1);
    assert_eq!(counts.notifications, 2);

    assert!(AnswerRepo::find_by_id(&pool, doomed.id).await.unwrap().is_none());
    assert!(AnswerRepo::find_by_id(&pool, kept.id).await.unwrap().is_some());
    assert_eq!(count(&pool, "comments").await, 1);
    assert_eq!(count(&pool, "notifications").await, 1);
    assert!(QuestionRepo::find_by_id(&pool, q.id).await.unwrap().is_some());
}

#[sqlx::test(migrations = "./migrations")]
async fn delete_comment_removes_mentions_and_notifications(pool: PgPool) {
    let owner = common::user(&pool, "owner").await;
    let other = common::user(&pool, "other").await;
    let q = common::question(&pool, owner.id, "Traits", &[]).await;
    let a = common::answer(&pool, q.id, owner.id).await;
    let c = common::comment(&pool, a.id, owner.id, vec![other.id]).await;
    notify(&pool, owner.id, other.id, NotificationType::Mentioned, None, Some(a.id), Some(c.id)).await;

    assert!(CommentRepo::delete_cascade(&pool, c.id).await.unwrap());
    assert!(!CommentRepo::delete_cascade(&pool, c.id).await.unwrap());

    assert_eq!(count(&pool, "comments").await, 0);
    assert_eq!(count(&pool, "mentions").await, 0);
    assert_eq!(count(&pool, "notifications").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn restrict_fk_blocks_raw_parent_delete(pool: PgPool) {
    let owner = common::user(&pool, "owner").await;
    let q = common::question(&pool, owner.id, "Raw delete", &[]).await;
    common::answer(&pool, q.id, owner.id).await;

    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(q.id)
        .execute(&pool)
        .await;
    assert!(result.is_err(), "questions with answers must not be deletable directly");
}
