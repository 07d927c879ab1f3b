//! Comment Reply Handlers

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedReply, ApiResponse};
use crate::application::services::{CommentReplyService, CommentReplyServiceImpl};
use crate::domain::ContentPayload;
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn reply_service(state: &AppState) -> CommentReplyServiceImpl {
    let repos = &state.repositories;
    CommentReplyServiceImpl::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.replies.clone(),
    )
}

/// Reply to a comment
pub async fn post_comment_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    JsonBody(body): JsonBody<ContentPayload>,
) -> Result<(StatusCode, Json<ApiResponse<AddedReply>>), AppError> {
    let added_reply = reply_service(&state)
        .add_comment_reply(&auth.user_id, &thread_id, &comment_id, body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedReply { added_reply })),
    ))
}

/// Soft-delete own reply
pub async fn delete_comment_reply(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    reply_service(&state)
        .delete_comment_reply(&auth.user_id, &thread_id, &comment_id, &reply_id)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
