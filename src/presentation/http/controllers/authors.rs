// src/presentation/http/controllers/authors.rs
use crate::application::{
    commands::authors::{DeleteAuthorCommand, SaveAuthorCommand, UpdateAuthorCommand},
    dto::AuthorDto,
    queries::authors::GetAuthorQuery,
};
use crate::domain::author::Author;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, entity_id};
use crate::presentation::http::openapi::{AuthorRequest, ErrorResponse, ValidationErrorResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/authors",
    responses((status = 200, description = "All authors.", body = [AuthorDto])),
    tag = "Authors"
)]
pub async fn list_authors(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<AuthorDto>>> {
    state
        .services
        .author_queries
        .list_authors()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/authors",
    request_body = AuthorRequest,
    responses(
        (status = 201, description = "Author created or updated.", body = AuthorDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn create_author(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<AuthorDto>)> {
    let author = state
        .services
        .author_commands
        .save_author(SaveAuthorCommand { payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(author)))
}

#[utoipa::path(
    get,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 200, description = "The author.", body = AuthorDto),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn get_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<AuthorDto>> {
    let id = entity_id(&id, Author::ENTITY)?;
    state
        .services
        .author_queries
        .get_author(GetAuthorQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author id")),
    request_body = AuthorRequest,
    responses(
        (status = 200, description = "Author updated.", body = AuthorDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn update_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<AuthorDto>> {
    let id = entity_id(&id, Author::ENTITY)?;
    state
        .services
        .author_commands
        .update_author(UpdateAuthorCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/authors/{id}",
    params(("id" = i64, Path, description = "Author id")),
    responses(
        (status = 204, description = "Author and their articles deleted."),
        (status = 404, description = "No such author.", body = ErrorResponse)
    ),
    tag = "Authors"
)]
pub async fn delete_author(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = entity_id(&id, Author::ENTITY)?;
    state
        .services
        .author_commands
        .delete_author(DeleteAuthorCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
