use axum::http::{Method, StatusCode};
use serde_json::json;
use std::sync::Arc;
use techtest_api::domain::{author::AuthorRepository, region::RegionRepository};
use techtest_api::infrastructure::repositories::{SqliteAuthorRepository, SqliteRegionRepository};

mod support;

use support::{insert_author, mocks::BrokenArticleRepo, router_with, send, spawn_app};

#[tokio::test]
async fn health_reports_ok() {
    let app = spawn_app().await;

    let resp = app.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn openapi_document_lists_resource_paths() {
    let app = spawn_app().await;

    let resp = app.get("/openapi.json").await;

    assert_eq!(resp.status, StatusCode::OK);
    let paths = resp.body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/articles/{id}"));
    assert!(paths.contains_key("/regions"));
    assert_eq!(resp.body["info"]["title"], "Techtest API");
}

#[tokio::test]
async fn store_failures_become_500_with_message() {
    let app = spawn_app().await;
    let author = insert_author(&app.pool, "user1", "foo").await;
    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(Arc::clone(&app.pool)));
    let region_repo: Arc<dyn RegionRepository> =
        Arc::new(SqliteRegionRepository::new(Arc::clone(&app.pool)));
    let router = router_with(author_repo, region_repo, Arc::new(BrokenArticleRepo));

    let listed = send(&router, Method::GET, "/articles", None).await;
    assert_eq!(listed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        listed.body,
        json!({ "error": "Internal Server Error", "message": "database is locked" })
    );

    let payload = json!({ "author_id": i64::from(author.id) }).to_string();
    let saved = send(&router, Method::POST, "/articles", Some(payload)).await;
    assert_eq!(saved.status, StatusCode::INTERNAL_SERVER_ERROR);

    let authors = send(&router, Method::GET, "/authors", None).await;
    assert_eq!(authors.status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_routes_are_404() {
    let app = spawn_app().await;

    let resp = app.get("/users").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
}
