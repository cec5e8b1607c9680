//! Post handlers.

use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::middleware::error::AppResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListPostsQuery {
    /// Category slug to filter by.
    pub category: Option<String>,
}

/// GET /api/posts
pub async fn list_posts(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let posts = state.store.list_posts(query.category.as_deref()).await?;
    Ok(HttpResponse::Ok().json(posts))
}

/// GET /api/posts/{slug}
pub async fn get_post(
    state: web::Data<AppState>,
    slug: web::Path<String>,
) -> AppResult<HttpResponse> {
    let post = state.store.get_post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}
