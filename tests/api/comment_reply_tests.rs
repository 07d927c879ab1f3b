//! Comment Reply API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_post_reply_returns_added_reply() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
            json!({"content": "sebuah balasan"}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");

    let added = &json["data"]["addedReply"];
    assert!(added["id"].as_str().unwrap().starts_with("reply-"));
    assert_eq!(added["content"], "sebuah balasan");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn test_post_reply_to_missing_comment() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/comment-404/replies", thread_id),
            json!({"content": "x"}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "komentar tidak ditemukan");
}

#[tokio::test]
async fn test_post_reply_missing_content() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
            json!({"content": null}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "tidak dapat membuat balasan komentar baru karena properti yang dibutuhkan tidak lengkap"
    );
}

#[tokio::test]
async fn test_post_reply_array_body_rejected() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments/{}/replies", thread_id, comment_id),
            json!([{"content": "sebuah balasan"}]),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "body request harus berupa objek JSON yang valid");

    let json = body_json(app.get(&format!("/threads/{}", thread_id)).await).await;
    assert_eq!(json["data"]["thread"]["comments"][0]["replies"], json!([]));
}

#[tokio::test]
async fn test_delete_reply_soft_deletes() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &token).await;
    let reply_id = app.create_reply(&thread_id, &comment_id, "a reply", &token).await;

    let response = app
        .delete_auth(
            &format!("/threads/{}/comments/{}/replies/{}", thread_id, comment_id, reply_id),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success"}));
    assert_eq!(app.forum.reply_is_deleted(&reply_id), Some(true));
}

#[tokio::test]
async fn test_delete_reply_of_another_user() {
    let app = TestApp::new().await;
    let owner = app.login("user-owner", "owner");
    let intruder = app.login("user-intruder", "intruder");
    let thread_id = app.create_thread(&owner).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &owner).await;
    let reply_id = app.create_reply(&thread_id, &comment_id, "a reply", &owner).await;

    let response = app
        .delete_auth(
            &format!("/threads/{}/comments/{}/replies/{}", thread_id, comment_id, reply_id),
            &intruder,
        )
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(app.forum.reply_is_deleted(&reply_id), Some(false));
}

#[tokio::test]
async fn test_delete_missing_reply() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "a comment", &token).await;

    let response = app
        .delete_auth(
            &format!("/threads/{}/comments/{}/replies/reply-404", thread_id, comment_id),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "balasan komentar tidak ditemukan");
}
