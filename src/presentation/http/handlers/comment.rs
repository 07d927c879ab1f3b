//! Comment Handlers

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedComment, ApiResponse};
use crate::application::services::{CommentService, CommentServiceImpl};
use crate::domain::ContentPayload;
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn comment_service(state: &AppState) -> CommentServiceImpl {
    let repos = &state.repositories;
    CommentServiceImpl::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.likes.clone(),
    )
}

/// Comment on a thread
pub async fn post_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path(thread_id): Path<String>,
    JsonBody(body): JsonBody<ContentPayload>,
) -> Result<(StatusCode, Json<ApiResponse<AddedComment>>), AppError> {
    let added_comment = comment_service(&state)
        .add_comment(&auth.user_id, &thread_id, body)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedComment { added_comment })),
    ))
}

/// Soft-delete own comment
pub async fn delete_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    comment_service(&state)
        .delete_comment(&auth.user_id, &thread_id, &comment_id)
        .await?;

    Ok(Json(ApiResponse::ok()))
}

/// Toggle like on a comment
pub async fn like_unlike_comment(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    Path((thread_id, comment_id)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    comment_service(&state)
        .like_unlike_comment(&auth.user_id, &thread_id, &comment_id)
        .await?;

    Ok(Json(ApiResponse::ok()))
}
