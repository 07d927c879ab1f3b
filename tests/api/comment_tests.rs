//! Comment API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_post_comment_returns_added_comment() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments", thread_id),
            json!({"content": "sebuah comment"}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");

    let added = &json["data"]["addedComment"];
    assert!(added["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added["content"], "sebuah comment");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn test_post_comment_on_missing_thread() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    // Thread existence is checked before the payload.
    let response = app
        .post_json_auth("/threads/thread-404/comments", json!({}), &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn test_post_comment_invalid_payload() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let uri = format!("/threads/{}/comments", thread_id);

    let response = app.post_json_auth(&uri, json!({"content": ""}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "tidak dapat membuat comment baru karena properti yang dibutuhkan tidak lengkap"
    );

    let response = app.post_json_auth(&uri, json!({"content": true}), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "tidak dapat membuat comment baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_post_comment_array_body_rejected() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app
        .post_json_auth(
            &format!("/threads/{}/comments", thread_id),
            json!(["sebuah comment"]),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "body request harus berupa objek JSON yang valid");

    let json = body_json(app.get(&format!("/threads/{}", thread_id)).await).await;
    assert_eq!(json["data"]["thread"]["comments"], json!([]));
}

#[tokio::test]
async fn test_post_comment_without_token() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/threads/thread-1/comments",
            Some(json!({"content": "x"})),
            None,
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_comment_soft_deletes() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "to be removed", &token).await;

    let response = app
        .delete_auth(&format!("/threads/{}/comments/{}", thread_id, comment_id), &token)
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success"}));
    assert_eq!(app.forum.comment_is_deleted(&comment_id), Some(true));
}

#[tokio::test]
async fn test_delete_comment_of_another_user() {
    let app = TestApp::new().await;
    let owner = app.login("user-owner", "owner");
    let intruder = app.login("user-intruder", "intruder");
    let thread_id = app.create_thread(&owner).await;
    let comment_id = app.create_comment(&thread_id, "mine", &owner).await;

    let response = app
        .delete_auth(&format!("/threads/{}/comments/{}", thread_id, comment_id), &intruder)
        .await;

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "Anda tidak berhak mengakses resource ini");
    assert_eq!(app.forum.comment_is_deleted(&comment_id), Some(false));
}

#[tokio::test]
async fn test_delete_missing_comment() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app
        .delete_auth(&format!("/threads/{}/comments/comment-404", thread_id), &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "komentar tidak ditemukan");
}

#[tokio::test]
async fn test_like_toggles_single_row() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;
    let comment_id = app.create_comment(&thread_id, "likeable", &token).await;
    let uri = format!("/threads/{}/comments/{}/likes", thread_id, comment_id);

    let response = app.put_auth(&uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({"status": "success"}));

    let rows = app.forum.like_rows(&comment_id);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_liked);

    let response = app.put_auth(&uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.forum.like_rows(&comment_id);
    assert_eq!(rows.len(), 1);
    assert!(!rows[0].is_liked);

    let json = body_json(app.get(&format!("/threads/{}", thread_id)).await).await;
    assert_eq!(json["data"]["thread"]["comments"][0]["likeCount"], 0);

    // Liking again reuses the same row.
    let response = app.put_auth(&uri, &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let rows = app.forum.like_rows(&comment_id);
    assert_eq!(rows.len(), 1);
    assert!(rows[0].is_liked);

    let json = body_json(app.get(&format!("/threads/{}", thread_id)).await).await;
    assert_eq!(json["data"]["thread"]["comments"][0]["likeCount"], 1);
}

#[tokio::test]
async fn test_like_missing_comment() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app
        .put_auth(&format!("/threads/{}/comments/comment-404/likes", thread_id), &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_like_on_missing_thread() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .put_auth("/threads/thread-404/comments/comment-1/likes", &token)
        .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["message"], "thread tidak ditemukan");
}
