//! Category handlers.

use actix_web::{HttpResponse, web};

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let categories = state.store.list_categories().await?;
    Ok(HttpResponse::Ok().json(categories))
}
