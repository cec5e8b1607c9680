use std::sync::Arc;

use actix_web::{App, http::StatusCode, test, web};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};

use anipulse_infra::SqliteContentStore;
use anipulse_infra::database::seed;

use crate::handlers::configure_routes;
use crate::state::AppState;

async fn test_state() -> AppState {
    // One pooled connection: extra connections to `sqlite::memory:` would
    // each open their own empty database.
    let opts = ConnectOptions::new("sqlite::memory:")
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false)
        .to_owned();

    let db = Database::connect(opts).await.expect("connect to in-memory sqlite");
    Migrator::up(&db, None).await.expect("run migrations");
    seed::seed_demo_content(&db).await.expect("seed demo content");

    AppState {
        store: Arc::new(SqliteContentStore::new(db)),
    }
}

macro_rules! test_app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(test_state().await))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn health_reports_ok() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/health").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn categories_endpoint_lists_all() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/categories").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let categories = body.as_array().expect("array body");
    assert_eq!(categories.len(), 5);
    assert_eq!(categories[0]["slug"], "news");
}

#[actix_web::test]
async fn posts_endpoint_returns_joined_rows_newest_first() {
    let app = test_app!();

    let req = test::TestRequest::get().uri("/api/posts").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let posts = body.as_array().expect("array body");
    assert_eq!(posts.len(), 5);
    assert_eq!(posts[0]["slug"], "ghibli-novo-filme");
    // Joined columns come flattened, as the view layer consumes them.
    assert_eq!(posts[0]["category_name"], "Notícias");
    assert_eq!(posts[0]["author_name"], "Otaku Chief");
}

#[actix_web::test]
async fn posts_endpoint_filters_by_category() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/posts?category=reviews")
        .to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let posts = body.as_array().expect("array body");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0]["slug"], "review-solo-leveling");
}

#[actix_web::test]
async fn posts_endpoint_unknown_category_yields_empty_200() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/posts?category=sports")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn post_detail_unknown_slug_is_404_problem() {
    let app = test_app!();

    let req = test::TestRequest::get()
        .uri("/api/posts/nonexistent-slug")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
}

#[actix_web::test]
async fn comment_submission_round_trips_over_http() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .set_json(serde_json::json!({
            "postId": 1,
            "userName": "Misato",
            "content": "Já quero a segunda temporada!",
            "rating": 5
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let created: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(created["post_id"], 1);
    assert_eq!(created["user_name"], "Misato");
    assert_eq!(created["rating"], 5);
    assert!(created["id"].as_i64().is_some_and(|id| id > 0));

    let req = test::TestRequest::get().uri("/api/comments/1").to_request();
    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    let comments = body.as_array().expect("array body");
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0]["content"], "Já quero a segunda temporada!");
}

#[actix_web::test]
async fn comment_without_user_name_is_400() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .set_json(serde_json::json!({
            "postId": 1,
            "content": "anônimo"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], 400);
}

#[actix_web::test]
async fn comment_with_out_of_range_rating_is_400() {
    let app = test_app!();

    let req = test::TestRequest::post()
        .uri("/api/comments")
        .set_json(serde_json::json!({
            "postId": 1,
            "userName": "Rei",
            "content": "nota 6",
            "rating": 6
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn rated_comments_move_the_post_aggregate() {
    let app = test_app!();

    for (user, rating) in [("A", 4), ("B", 2)] {
        let req = test::TestRequest::post()
            .uri("/api/comments")
            .set_json(serde_json::json!({
                "postId": 2,
                "userName": user,
                "content": "nota",
                "rating": rating
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let req = test::TestRequest::get()
        .uri("/api/posts/one-piece-novo-capitulo")
        .to_request();
    let post: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(post["rating"].as_f64(), Some(3.0));
}
