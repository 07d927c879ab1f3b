//! Thread Handlers

use axum::{
    extract::{Extension, Path, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{AddedThread, ApiResponse, ThreadData};
use crate::application::services::{ThreadService, ThreadServiceImpl};
use crate::domain::ThreadPayload;
use crate::presentation::http::extractors::JsonBody;
use crate::presentation::middleware::AuthUser;
use crate::shared::error::AppError;
use crate::startup::AppState;

fn thread_service(state: &AppState) -> ThreadServiceImpl {
    let repos = &state.repositories;
    ThreadServiceImpl::new(
        repos.threads.clone(),
        repos.comments.clone(),
        repos.replies.clone(),
        repos.likes.clone(),
    )
}

/// Create thread
pub async fn post_thread(
    State(state): State<AppState>,
    Extension(auth): Extension<AuthUser>,
    JsonBody(body): JsonBody<ThreadPayload>,
) -> Result<(StatusCode, Json<ApiResponse<AddedThread>>), AppError> {
    let added_thread = thread_service(&state).add_thread(&auth.user_id, body).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(AddedThread { added_thread })),
    ))
}

/// Get thread with its comments and replies
pub async fn get_thread(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Json<ApiResponse<ThreadData>>, AppError> {
    let thread = thread_service(&state).get_thread(&thread_id).await?;

    Ok(Json(ApiResponse::success(ThreadData { thread })))
}
