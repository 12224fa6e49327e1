// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{DeleteArticleCommand, SaveArticleCommand, UpdateArticleCommand},
    dto::ArticleDto,
    queries::articles::GetArticleQuery,
};
use crate::domain::article::Article;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, entity_id};
use crate::presentation::http::openapi::{ArticleRequest, ErrorResponse, ValidationErrorResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/articles",
    responses((status = 200, description = "All articles with their author and regions.", body = [ArticleDto])),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<ArticleDto>>> {
    state
        .services
        .article_queries
        .list_articles()
        .await
        .into_http()
        .map(Json)
}

/// Upserts an article. Each region reference without an `id` inserts a new
/// region, even when one with the same code and name exists.
#[utoipa::path(
    post,
    path = "/articles",
    request_body = ArticleRequest,
    responses(
        (status = 201, description = "Article saved.", body = ArticleDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<ArticleDto>)> {
    let article = state
        .services
        .article_commands
        .save_article(SaveArticleCommand { payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(article)))
}

#[utoipa::path(
    get,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article.", body = ArticleDto),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<ArticleDto>> {
    let id = entity_id(&id, Article::ENTITY)?;
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { id })
        .await
        .into_http()
        .map(Json)
}

/// The path id replaces any `id` in the body. Omitting `regions` keeps the
/// current association; an empty list clears it.
#[utoipa::path(
    put,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    request_body = ArticleRequest,
    responses(
        (status = 200, description = "Article updated.", body = ArticleDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn update_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<ArticleDto>> {
    let id = entity_id(&id, Article::ENTITY)?;
    state
        .services
        .article_commands
        .update_article(UpdateArticleCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/articles/{id}",
    params(("id" = i64, Path, description = "Article id")),
    responses(
        (status = 200, description = "Article deleted. The body is empty."),
        (status = 404, description = "No such article.", body = ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = entity_id(&id, Article::ENTITY)?;
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::OK)
}
