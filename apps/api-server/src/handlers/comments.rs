//! Comment handlers.

use actix_web::{HttpResponse, web};

use anipulse_core::domain::NewComment;
use anipulse_shared::dto::CreateCommentRequest;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/comments/{post_id}
pub async fn list_comments(
    state: web::Data<AppState>,
    post_id: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let comments = state.store.list_comments_for_post(*post_id).await?;
    Ok(HttpResponse::Ok().json(comments))
}

/// POST /api/comments
pub async fn create_comment(
    state: web::Data<AppState>,
    body: web::Json<CreateCommentRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    let comment = state
        .store
        .create_comment(NewComment {
            post_id: req.post_id,
            user_name: req.user_name,
            content: req.content,
            rating: req.rating,
        })
        .await?;

    Ok(HttpResponse::Ok().json(comment))
}
