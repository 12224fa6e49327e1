// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, AuthorDto, RegionDto};
use serde::{Deserialize, Serialize};
use std::{
    collections::{BTreeMap, HashSet},
    env,
    fs::File,
    io::BufWriter,
    path::Path,
};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi, ToSchema};

pub const DEFAULT_SNAPSHOT_PATH: &str = "spec/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

/// Body of 404 responses, e.g. `{"error": "No Region matches the given query"}`.
/// 500 responses also carry `message`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Field name to messages. Body-level failures use the `_schema` key.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorResponse(pub BTreeMap<String, Vec<String>>);

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthorRequest {
    /// Updates that author, or creates it under this id.
    pub id: Option<i64>,
    #[schema(max_length = 255)]
    pub first_name: String,
    #[schema(max_length = 255)]
    pub last_name: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegionRequest {
    /// Without an id the code must not be taken yet.
    pub id: Option<i64>,
    #[schema(min_length = 2, max_length = 2)]
    pub code: String,
    #[schema(max_length = 255)]
    pub name: Option<String>,
}

/// Either `{id}` of a stored region, or `{code, name}` for a region that is
/// inserted as a new row.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegionReferenceRequest {
    pub id: Option<i64>,
    #[schema(min_length = 2, max_length = 2)]
    pub code: Option<String>,
    #[schema(max_length = 255)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleRequest {
    pub id: Option<i64>,
    #[schema(max_length = 255)]
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: i64,
    /// Replaces the association when present, in order.
    pub regions: Option<Vec<RegionReferenceRequest>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::authors::list_authors,
        crate::presentation::http::controllers::authors::create_author,
        crate::presentation::http::controllers::authors::get_author,
        crate::presentation::http::controllers::authors::update_author,
        crate::presentation::http::controllers::authors::delete_author,
        crate::presentation::http::controllers::regions::list_regions,
        crate::presentation::http::controllers::regions::create_region,
        crate::presentation::http::controllers::regions::get_region,
        crate::presentation::http::controllers::regions::update_region,
        crate::presentation::http::controllers::regions::delete_region,
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::update_article,
        crate::presentation::http::controllers::articles::delete_article,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            ValidationErrorResponse,
            AuthorRequest,
            RegionRequest,
            RegionReferenceRequest,
            ArticleRequest,
            AuthorDto,
            RegionDto,
            ArticleDto
        )
    ),
    tags(
        (name = "Authors", description = "Author endpoints"),
        (name = "Regions", description = "Region endpoints"),
        (name = "Articles", description = "Article endpoints"),
        (name = "System", description = "System level endpoints")
    ),
    modifiers(&ApiDocCustomizer),
    info(
        title = "Techtest API",
        description = "Authors, regions and articles",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

struct ApiDocCustomizer;

impl Modify for ApiDocCustomizer {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let servers = openapi.servers.get_or_insert_with(Vec::new);
        servers.clear();

        let urls: Vec<String> = env::var("PUBLIC_API_URLS")
            .ok()
            .map(|value| {
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|segment| !segment.is_empty())
                    .map(|segment| segment.trim_end_matches('/').to_string())
                    .collect()
            })
            .unwrap_or_default();

        let mut seen = HashSet::new();
        for url in urls {
            if seen.insert(url.clone()) {
                servers.push(Server::new(url));
            }
        }
        if servers.is_empty() {
            servers.push(Server::new("/"));
        }
    }
}

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}

pub fn snapshot_path() -> String {
    env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| DEFAULT_SNAPSHOT_PATH.to_string())
}

pub fn write_openapi_snapshot(output_path: &str) -> std::io::Result<()> {
    let spec = ApiDoc::openapi();
    let path = Path::new(output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &spec)?;
    Ok(())
}
