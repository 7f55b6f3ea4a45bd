//! HTTP-level integration tests for questions: creation, listing,
//! ownership checks and the delete cascade.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, count, create_answer, create_question, create_user, delete_auth, get,
    post_json_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn create_question_normalizes_tags(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;

    let response = post_json_auth(
        app,
        "/api/v1/questions",
        json!({
            "title": "  How do lifetimes work?  ",
            "description": "Borrow checker keeps complaining.",
            "tags": ["Rust", "  borrow   checker ", "rust", ""],
        }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "How do lifetimes work?");
    assert_eq!(json["data"]["username"], "alice");
    assert_eq!(json["data"]["tags"], json!(["borrow-checker", "rust"]));
    assert_eq!(json["data"]["answer_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn create_question_rejects_blank_title(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;

    let response = post_json_auth(
        app,
        "/api/v1/questions",
        json!({ "title": "   ", "description": "body" }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_questions_pages_ten_at_a_time(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    for i in 0..12 {
        create_question(app.clone(), &alice, &format!("Question {i}"), &[]).await;
    }

    let json = body_json(get(app.clone(), "/api/v1/questions").await).await;
    assert_eq!(json["data"]["questions"].as_array().unwrap().len(), 10);
    assert_eq!(json["data"]["current_page"], 1);
    assert_eq!(json["data"]["total_pages"], 2);
    assert_eq!(json["data"]["total_questions"], 12);
    assert_eq!(json["data"]["questions"][0]["title"], "Question 11");

    let json = body_json(get(app, "/api/v1/questions?page=2").await).await;
    assert_eq!(json["data"]["questions"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["current_page"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_question_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/questions/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["success"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_can_update_and_replace_tags(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let qid = create_question(app.clone(), &alice, "Old title", &["rust", "sql"]).await;

    let response = put_json_auth(
        app,
        &format!("/api/v1/questions/{qid}"),
        json!({ "title": "New title", "description": "New body", "tags": ["axum"] }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "New title");
    assert_eq!(json["data"]["tags"], json!(["axum"]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_cannot_update_or_delete(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Alice's question", &[]).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/questions/{qid}"),
        json!({ "title": "Hijacked", "description": "x" }),
        &bob.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app.clone(), &format!("/api/v1/questions/{qid}"), &bob.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(get(app, &format!("/api/v1/questions/{qid}")).await).await;
    assert_eq!(json["data"]["title"], "Alice's question");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn delete_question_cascades_to_everything_below_it(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let carol = create_user(&pool, "carol").await;
    let qid = create_question(app.clone(), &alice, "Doomed", &["rust"]).await;

    for _ in 0..2 {
        let aid = create_answer(app.clone(), &bob, qid).await;
        for _ in 0..2 {
            let response = post_json_auth(
                app.clone(),
                &format!("/api/v1/answers/{aid}/comments"),
                json!({ "content": "cc @carol" }),
                &alice.token,
            )
            .await;
            assert_eq!(response.status(), StatusCode::CREATED);
        }
        let response = post_json_auth(
            app.clone(),
            "/api/v1/votes",
            json!({ "answer_id": aid, "vote_type": "UP" }),
            &carol.token,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = delete_auth(app.clone(), &format!("/api/v1/questions/{qid}"), &alice.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(count(&pool, "questions", "true").await, 0);
    assert_eq!(count(&pool, "question_tags", "true").await, 0);
    assert_eq!(count(&pool, "answers", "true").await, 0);
    assert_eq!(count(&pool, "comments", "true").await, 0);
    assert_eq!(count(&pool, "mentions", "true").await, 0);
    assert_eq!(count(&pool, "votes", "true").await, 0);
    assert_eq!(count(&pool, "notifications", "true").await, 0);
    // Tags themselves are shared and survive.
    assert_eq!(count(&pool, "tags", "name = 'rust'").await, 1);

    let response = get(app, &format!("/api/v1/questions/{qid}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_body_field_returns_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;

    let response = post_json_auth(
        app,
        "/api/v1/questions",
        json!({ "description": "x" }),
        &alice.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["message"].as_str().unwrap().contains("title"));
    assert_eq!(count(&pool, "questions", "true").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_path_and_query_return_400_envelope(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/questions/not-a-number").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["success"], false);

    let response = get(app, "/api/v1/questions?page=abc").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
