//! Thread API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use tower::ServiceExt;

use crate::common::{body_json, TestApp};

#[tokio::test]
async fn test_post_thread_returns_added_thread() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads",
            json!({"title": "sebuah thread", "body": "sebuah body thread"}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "success");

    let added = &json["data"]["addedThread"];
    assert!(added["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added["title"], "sebuah thread");
    assert_eq!(added["owner"], "user-123");
}

#[tokio::test]
async fn test_post_thread_without_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .request("POST", "/threads", Some(json!({"title": "t", "body": "b"})), None)
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
}

#[tokio::test]
async fn test_post_thread_with_invalid_token_is_unauthorized() {
    let app = TestApp::new().await;

    let response = app
        .post_json_auth("/threads", json!({"title": "t", "body": "b"}), "not-a-jwt")
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_post_thread_missing_property() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .post_json_auth("/threads", json!({"title": "sebuah thread"}), &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(
        json["message"],
        "tidak dapat membuat thread baru karena properti yang dibutuhkan tidak lengkap"
    );
}

#[tokio::test]
async fn test_post_thread_wrong_type() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .post_json_auth("/threads", json!({"title": 123, "body": ["b"]}), &token)
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "tidak dapat membuat thread baru karena tipe data tidak sesuai"
    );
}

#[tokio::test]
async fn test_post_thread_title_limit() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .post_json_auth(
            "/threads",
            json!({"title": "a".repeat(151), "body": "b"}),
            &token,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(
        json["message"],
        "tidak dapat membuat thread baru karena karakter title melebihi batas limit"
    );
}

#[tokio::test]
async fn test_post_thread_malformed_json() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    let response = app
        .router
        .clone()
        .oneshot(
            axum::http::Request::builder()
                .method("POST")
                .uri("/threads")
                .header("Content-Type", "application/json")
                .header("Authorization", format!("Bearer {}", token))
                .body(axum::body::Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
}

#[tokio::test]
async fn test_post_thread_array_body_rejected() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");

    for body in [json!(["sebuah thread", "sebuah body thread"]), json!([]), json!("sebuah thread")] {
        let response = app.post_json_auth("/threads", body, &token).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["status"], "fail");
        assert_eq!(json["message"], "body request harus berupa objek JSON yang valid");
    }
}

#[tokio::test]
async fn test_get_missing_thread() {
    let app = TestApp::new().await;

    let response = app.get("/threads/thread-404").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["status"], "fail");
    assert_eq!(json["message"], "thread tidak ditemukan");
}

#[tokio::test]
async fn test_get_thread_without_comments() {
    let app = TestApp::new().await;
    let token = app.login("user-123", "dicoding");
    let thread_id = app.create_thread(&token).await;

    let response = app.get(&format!("/threads/{}", thread_id)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let thread = &json["data"]["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].is_string());
    assert_eq!(thread["comments"], json!([]));
}

#[tokio::test]
async fn test_get_thread_full_discussion() {
    let app = TestApp::new().await;
    let alice = app.login("user-alice", "alice");
    let bob = app.login("user-bob", "bob");

    let thread_id = app.create_thread(&alice).await;
    let first = app.create_comment(&thread_id, "first comment", &alice).await;
    let second = app.create_comment(&thread_id, "second comment", &bob).await;

    let kept = app.create_reply(&thread_id, &first, "kept reply", &bob).await;
    let removed = app
        .create_reply(&thread_id, &first, "removed reply", &alice)
        .await;

    let response = app
        .delete_auth(
            &format!("/threads/{}/comments/{}/replies/{}", thread_id, first, removed),
            &alice,
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .delete_auth(&format!("/threads/{}/comments/{}", thread_id, second), &bob)
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    for token in [&alice, &bob] {
        let response = app
            .put_auth(&format!("/threads/{}/comments/{}/likes", thread_id, first), token)
            .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.get(&format!("/threads/{}", thread_id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    let comments = json["data"]["thread"]["comments"].as_array().unwrap();
    assert_eq!(comments.len(), 2);

    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "alice");
    assert_eq!(comments[0]["content"], "first comment");
    assert_eq!(comments[0]["likeCount"], 2);

    let replies = comments[0]["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 2);
    assert_eq!(replies[0]["id"], kept.as_str());
    assert_eq!(replies[0]["username"], "bob");
    assert_eq!(replies[0]["content"], "kept reply");
    assert_eq!(replies[1]["id"], removed.as_str());
    assert_eq!(replies[1]["content"], "**balasan telah dihapus**");

    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["content"], "**komentar telah dihapus**");
    assert_eq!(comments[1]["likeCount"], 0);
    assert_eq!(comments[1]["replies"], json!([]));
}
