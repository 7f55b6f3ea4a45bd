//! HTTP-level integration tests for answers: posting, moderation by the
//! question owner, edits and the answer cascade.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, count, create_answer, create_question, create_user, delete_auth, get, get_auth,
    post_json_auth, put_auth, put_json_auth,
};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn answering_notifies_question_owner_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Why?", &[]).await;

    let aid = create_answer(app.clone(), &bob, qid).await;

    let json = body_json(get_auth(app, "/api/v1/notification", &alice.token).await).await;
    let inbox = json["data"].as_array().unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0]["notification_type"], "ANSWERED");
    assert_eq!(inbox[0]["message"], "Added answer to your question.");
    assert_eq!(inbox[0]["sender_id"], bob.id);
    assert_eq!(inbox[0]["sender_username"], "bob");
    assert_eq!(inbox[0]["question_id"], qid);
    assert_eq!(inbox[0]["answer_id"], aid);
    assert_eq!(inbox[0]["is_read"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answering_own_question_sends_no_notification(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let qid = create_question(app.clone(), &alice, "Talking to myself", &[]).await;

    create_answer(app, &alice, qid).await;

    assert_eq!(count(&pool, "notifications", "true").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn new_answers_start_pending(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;

    let json = body_json(get(app, &format!("/api/v1/answers/{aid}")).await).await;
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["is_approved"], false);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn question_owner_approves_once(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;
    let uri = format!("/api/v1/answers/{aid}/approve");

    let response = put_auth(app.clone(), &uri, &alice.token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "approved");
    assert_eq!(json["data"]["is_approved"], true);

    let response = put_auth(app, &uri, &alice.token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_cannot_moderate(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;

    // The answer author is not the question owner.
    let response = put_auth(app.clone(), &format!("/api/v1/answers/{aid}/approve"), &bob.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response =
        delete_auth(app.clone(), &format!("/api/v1/answers/{aid}/reject"), &bob.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(get(app, &format!("/api/v1/answers/{aid}")).await).await;
    assert_eq!(json["data"]["status"], "pending");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reject_deletes_pending_answer(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;

    let response =
        delete_auth(app.clone(), &format!("/api/v1/answers/{aid}/reject"), &alice.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, &format!("/api/v1/answers/{aid}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    // The ANSWERED notification pointed at the answer and is gone too.
    assert_eq!(count(&pool, "notifications", "true").await, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn approved_answer_cannot_be_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;
    put_auth(app.clone(), &format!("/api/v1/answers/{aid}/approve"), &alice.token).await;

    let response =
        delete_auth(app, &format!("/api/v1/answers/{aid}/reject"), &alice.token).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(count(&pool, "answers", &format!("id = {aid}")).await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn editing_approved_answer_resets_to_pending(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;
    put_auth(app.clone(), &format!("/api/v1/answers/{aid}/approve"), &alice.token).await;

    let response = put_json_auth(
        app.clone(),
        &format!("/api/v1/answers/{aid}"),
        json!({ "description": "Edited after approval" }),
        &bob.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["description"], "Edited after approval");
    assert_eq!(json["data"]["status"], "pending");
    assert_eq!(json["data"]["is_approved"], false);

    // Only the author may edit.
    let response = put_json_auth(
        app,
        &format!("/api/v1/answers/{aid}"),
        json!({ "description": "Not mine" }),
        &alice.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn owner_deletes_answer_with_comments_and_votes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let aid = create_answer(app.clone(), &bob, qid).await;
    post_json_auth(
        app.clone(),
        &format!("/api/v1/answers/{aid}/comments"),
        json!({ "content": "thanks @bob" }),
        &alice.token,
    )
    .await;
    post_json_auth(
        app.clone(),
        "/api/v1/votes",
        json!({ "answer_id": aid, "vote_type": "DOWN" }),
        &alice.token,
    )
    .await;

    let response = delete_auth(app.clone(), &format!("/api/v1/answers/{aid}"), &alice.token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete_auth(app, &format!("/api/v1/answers/{aid}"), &bob.token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    assert_eq!(count(&pool, "answers", "true").await, 0);
    assert_eq!(count(&pool, "comments", "true").await, 0);
    assert_eq!(count(&pool, "mentions", "true").await, 0);
    assert_eq!(count(&pool, "votes", "true").await, 0);
    assert_eq!(count(&pool, "notifications", "true").await, 0);
    assert_eq!(count(&pool, "questions", "true").await, 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answers_are_listed_by_upvotes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let carol = create_user(&pool, "carol").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;
    let first = create_answer(app.clone(), &bob, qid).await;
    let second = create_answer(app.clone(), &carol, qid).await;

    post_json_auth(
        app.clone(),
        "/api/v1/votes",
        json!({ "answer_id": first, "vote_type": "UP" }),
        &alice.token,
    )
    .await;

    let json = body_json(get(app, &format!("/api/v1/questions/{qid}/answers")).await).await;
    let answers = json["data"].as_array().unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0]["id"], first);
    assert_eq!(answers[0]["upvotes"], 1);
    assert_eq!(answers[0]["username"], "bob");
    assert_eq!(answers[1]["id"], second);
    assert_eq!(answers[1]["upvotes"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answering_missing_question_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let bob = create_user(&pool, "bob").await;

    let response = post_json_auth(
        app,
        "/api/v1/questions/424242/answers",
        json!({ "description": "Into the void" }),
        &bob.token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answer_without_description_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let alice = create_user(&pool, "alice").await;
    let bob = create_user(&pool, "bob").await;
    let qid = create_question(app.clone(), &alice, "Q", &[]).await;

    let response = post_json_auth(
        app,
        &format!("/api/v1/questions/{qid}/answers"),
        json!({}),
        &bob.token,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().unwrap().contains("description"));
    assert_eq!(count(&pool, "answers", "true").await, 0);
}
