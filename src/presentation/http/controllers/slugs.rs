use crate::application::{
    commands::slugs::{ApplySlugEventCommand, SanitizePhase},
    dto::{AdminResponse, SlugDraftDto, SlugDto},
};
use crate::domain::slug::SlugFieldEvent;
use crate::presentation::http::extractors::AdminJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct GenerateSlugRequest {
    #[serde(default)]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SanitizeSlugRequest {
    #[serde(default)]
    pub input: String,
    pub phase: SanitizePhase,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SlugDraftRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub slug: String,
    pub event: SlugFieldEvent,
}

#[utoipa::path(
    post,
    path = "/api/admin/slugs",
    request_body = GenerateSlugRequest,
    responses(
        (status = 200, description = "Canonical slug; empty when the title has no letters or digits.", body = AdminResponse<SlugDto>)
    ),
    tag = "Slugs"
)]
pub async fn generate_slug(
    Extension(state): Extension<HttpState>,
    AdminJson(payload): AdminJson<GenerateSlugRequest>,
) -> Json<AdminResponse<SlugDto>> {
    let slug = state.services.slugs.generate(payload.title.as_deref());
    Json(AdminResponse::ok(slug))
}

#[utoipa::path(
    post,
    path = "/api/admin/slugs/sanitize",
    request_body = SanitizeSlugRequest,
    responses(
        (status = 200, description = "Lenient pass while typing, canonical pass on blur.", body = AdminResponse<SlugDto>)
    ),
    tag = "Slugs"
)]
pub async fn sanitize_slug(
    Extension(state): Extension<HttpState>,
    AdminJson(payload): AdminJson<SanitizeSlugRequest>,
) -> Json<AdminResponse<SlugDto>> {
    let slug = state.services.slugs.sanitize(&payload.input, payload.phase);
    Json(AdminResponse::ok(slug))
}

#[utoipa::path(
    post,
    path = "/api/admin/slugs/draft",
    request_body = SlugDraftRequest,
    responses(
        (status = 200, description = "Title/slug pair after the event.", body = AdminResponse<SlugDraftDto>)
    ),
    tag = "Slugs"
)]
pub async fn apply_slug_event(
    Extension(state): Extension<HttpState>,
    AdminJson(payload): AdminJson<SlugDraftRequest>,
) -> Json<AdminResponse<SlugDraftDto>> {
    let draft = state.services.slugs.apply_event(ApplySlugEventCommand {
        title: payload.title,
        slug: payload.slug,
        event: payload.event,
    });
    Json(AdminResponse::ok(draft))
}
