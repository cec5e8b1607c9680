//! HTTP handlers and route configuration.

mod categories;
mod comments;
mod health;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/categories", web::get().to(categories::list_categories))
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts/{slug}", web::get().to(posts::get_post))
            .route("/comments/{post_id}", web::get().to(comments::list_comments))
            .route("/comments", web::post().to(comments::create_comment)),
    );
}

#[cfg(test)]
mod tests;
