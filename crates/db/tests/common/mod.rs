//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use askhub_db::models::answer::{Answer, CreateAnswer};
use askhub_db::models::comment::{Comment, CreateComment};
use askhub_db::models::question::{CreateQuestion, Question};
use askhub_db::models::user::{CreateUser, User};
use askhub_db::repositories::{AnswerRepo, CommentRepo, QuestionRepo, UserRepo};
use sqlx::PgPool;

pub async fn user(pool: &PgPool, username: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "not-a-real-hash".to_string(),
            role: "user".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn question(pool: &PgPool, owner_id: i64, title: &str, tags: &[&str]) -> Question {
    QuestionRepo::create(
        pool,
        &CreateQuestion {
            user_id: owner_id,
            title: title.to_string(),
            description: format!("<p>{title} details</p>"),
            cover_image: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        },
    )
    .await
    .unwrap()
}

pub async fn answer(pool: &PgPool, question_id: i64, author_id: i64) -> Answer {
    AnswerRepo::create(
        pool,
        &CreateAnswer {
            question_id,
            user_id: author_id,
            description: "<p>try this</p>".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn comment(
    pool: &PgPool,
    answer_id: i64,
    author_id: i64,
    mentioned_user_ids: Vec<i64>,
) -> Comment {
    CommentRepo::create(
        pool,
        &CreateComment {
            answer_id,
            user_id: author_id,
            content: "nice".to_string(),
            mentioned_user_ids,
        },
    )
    .await
    .unwrap()
}

pub async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}
