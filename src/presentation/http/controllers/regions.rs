// src/presentation/http/controllers/regions.rs
use crate::application::{
    commands::regions::{DeleteRegionCommand, SaveRegionCommand, UpdateRegionCommand},
    dto::RegionDto,
    queries::regions::GetRegionQuery,
};
use crate::domain::region::Region;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{JsonPayload, entity_id};
use crate::presentation::http::openapi::{RegionRequest, ErrorResponse, ValidationErrorResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};

#[utoipa::path(
    get,
    path = "/regions",
    responses((status = 200, description = "All regions.", body = [RegionDto])),
    tag = "Regions"
)]
pub async fn list_regions(Extension(state): Extension<HttpState>) -> HttpResult<Json<Vec<RegionDto>>> {
    state
        .services
        .region_queries
        .list_regions()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/regions",
    request_body = RegionRequest,
    responses(
        (status = 201, description = "Region created or updated.", body = RegionDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn create_region(
    Extension(state): Extension<HttpState>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<(StatusCode, Json<RegionDto>)> {
    let region = state
        .services
        .region_commands
        .save_region(SaveRegionCommand { payload })
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(region)))
}

#[utoipa::path(
    get,
    path = "/regions/{id}",
    params(("id" = i64, Path, description = "Region id")),
    responses(
        (status = 200, description = "The region.", body = RegionDto),
        (status = 404, description = "No such region.", body = ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn get_region(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<Json<RegionDto>> {
    let id = entity_id(&id, Region::ENTITY)?;
    state
        .services
        .region_queries
        .get_region(GetRegionQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/regions/{id}",
    params(("id" = i64, Path, description = "Region id")),
    request_body = RegionRequest,
    responses(
        (status = 200, description = "Region updated.", body = RegionDto),
        (status = 400, description = "Validation failed.", body = ValidationErrorResponse),
        (status = 404, description = "No such region.", body = ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn update_region(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
    JsonPayload(payload): JsonPayload,
) -> HttpResult<Json<RegionDto>> {
    let id = entity_id(&id, Region::ENTITY)?;
    state
        .services
        .region_commands
        .update_region(UpdateRegionCommand { id, payload })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/regions/{id}",
    params(("id" = i64, Path, description = "Region id")),
    responses(
        (status = 200, description = "Region deleted. The body is empty."),
        (status = 404, description = "No such region.", body = ErrorResponse)
    ),
    tag = "Regions"
)]
pub async fn delete_region(
    Extension(state): Extension<HttpState>,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = entity_id(&id, Region::ENTITY)?;
    state
        .services
        .region_commands
        .delete_region(DeleteRegionCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::OK)
}
