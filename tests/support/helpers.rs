// tests/support/helpers.rs
use axum::Router;
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use techtest_api::application::services::ApplicationServices;
use techtest_api::domain::{
    article::ArticleRepository, author::AuthorRepository, region::RegionRepository,
};
use techtest_api::infrastructure::{
    database::{init_memory_pool, run_migrations},
    repositories::{SqliteArticleRepository, SqliteAuthorRepository, SqliteRegionRepository},
};
use techtest_api::presentation::http::{routes::build_router, state::HttpState};

pub struct TestApp {
    pub router: Router,
    pub pool: Arc<SqlitePool>,
}

/// Router over a fresh in-memory database with migrations applied.
pub async fn spawn_app() -> TestApp {
    let pool = init_memory_pool().await.expect("in-memory pool");
    run_migrations(&pool).await.expect("migrations");
    let pool = Arc::new(pool);

    let author_repo: Arc<dyn AuthorRepository> =
        Arc::new(SqliteAuthorRepository::new(Arc::clone(&pool)));
    let region_repo: Arc<dyn RegionRepository> =
        Arc::new(SqliteRegionRepository::new(Arc::clone(&pool)));
    let article_repo: Arc<dyn ArticleRepository> =
        Arc::new(SqliteArticleRepository::new(Arc::clone(&pool)));

    TestApp {
        router: router_with(author_repo, region_repo, article_repo),
        pool,
    }
}

pub fn router_with(
    author_repo: Arc<dyn AuthorRepository>,
    region_repo: Arc<dyn RegionRepository>,
    article_repo: Arc<dyn ArticleRepository>,
) -> Router {
    let services = Arc::new(ApplicationServices::new(
        author_repo,
        region_repo,
        article_repo,
    ));
    build_router(HttpState { services }, &[])
}

pub struct TestResponse {
    pub status: StatusCode,
    /// `Value::Null` for an empty body.
    pub body: Value,
    pub raw: Vec<u8>,
}

impl TestApp {
    pub async fn get(&self, uri: &str) -> TestResponse {
        send(&self.router, Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, payload: Value) -> TestResponse {
        send(&self.router, Method::POST, uri, Some(payload.to_string())).await
    }

    pub async fn put(&self, uri: &str, payload: Value) -> TestResponse {
        send(&self.router, Method::PUT, uri, Some(payload.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        send(&self.router, Method::DELETE, uri, None).await
    }

    pub async fn send_raw(&self, method: Method, uri: &str, body: &str) -> TestResponse {
        send(&self.router, method, uri, Some(body.to_string())).await
    }
}

pub async fn send(router: &Router, method: Method, uri: &str, body: Option<String>) -> TestResponse {
    use tower::ServiceExt as _;

    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };
    let request = builder.body(body).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let raw = body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body")
        .to_vec();
    let body = if raw.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&raw).expect("json body")
    };

    TestResponse { status, body, raw }
}

/// Asserts a 404 with the fixed `No <Entity> matches the given query` body.
pub fn assert_not_found(response: &TestResponse, entity: &str) {
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        serde_json::json!({ "error": format!("No {entity} matches the given query") })
    );
}
