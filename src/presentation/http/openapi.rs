// src/presentation/http/openapi.rs
use axum::{Router, response::Redirect, routing::get};
use serde::{Deserialize, Serialize};
use std::{env, fs::File, io::BufWriter, path::Path};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::content::list_entities,
        crate::presentation::http::controllers::content::create_entity,
        crate::presentation::http::controllers::content::delete_entity,
        crate::presentation::http::controllers::ordering::move_entity,
        crate::presentation::http::controllers::slugs::generate_slug,
        crate::presentation::http::controllers::slugs::sanitize_slug,
        crate::presentation::http::controllers::slugs::apply_slug_event,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::content::DeletedResponse,
            crate::presentation::http::controllers::ordering::MoveRequest,
            crate::presentation::http::controllers::slugs::GenerateSlugRequest,
            crate::presentation::http::controllers::slugs::SanitizeSlugRequest,
            crate::presentation::http::controllers::slugs::SlugDraftRequest,
            crate::application::commands::slugs::SanitizePhase,
            crate::application::dto::ContentEntityDto,
            crate::application::dto::ContentListDto,
            crate::application::dto::NoticeDto,
            crate::application::dto::NoticeLevel,
            crate::application::dto::ReorderDto,
            crate::application::dto::SlugDto,
            crate::application::dto::SlugDraftDto,
            crate::domain::content::ResourceKind,
            crate::domain::ordering::MoveDirection,
            crate::domain::slug::SlugFieldEvent
        )
    ),
    tags(
        (name = "Content", description = "Collection passthrough with slug and order defaults"),
        (name = "Ordering", description = "Swap-based reordering of ranked collections"),
        (name = "Slugs", description = "Slug derivation for titled entries"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Movers CMS admin API",
        description = "Admin gateway in front of the marketing site's content API",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    let swagger = SwaggerUi::new("/docs").url(OPENAPI_JSON_PATH, ApiDoc::openapi());
    Router::new()
        .merge(swagger)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot() -> std::io::Result<String> {
    let doc = ApiDoc::openapi();
    let output_path =
        env::var("OPENAPI_SNAPSHOT_PATH").unwrap_or_else(|_| "spec/openapi.json".to_string());
    let path = Path::new(&output_path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(output_path)
}
