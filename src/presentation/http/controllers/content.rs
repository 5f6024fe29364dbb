// src/presentation/http/controllers/content.rs
use crate::application::{
    commands::content::{CreateEntityCommand, DeleteEntityCommand},
    dto::{AdminResponse, ContentEntityDto, ContentListDto},
    queries::content::ListEntitiesQuery,
};
use crate::domain::content::ListFilter;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminJson;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub id: String,
}

#[utoipa::path(
    get,
    path = "/api/admin/{resource}",
    params(
        ("resource" = String, Path, description = "Collection path, e.g. `services`"),
        ListFilter
    ),
    responses(
        (status = 200, description = "Entries, ranked collections sorted by order.", body = AdminResponse<ContentListDto>),
        (status = 400, description = "Unknown collection.", body = ErrorResponse),
        (status = 502, description = "Content API unreachable.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn list_entities(
    Extension(state): Extension<HttpState>,
    Path(resource): Path<String>,
    Query(filter): Query<ListFilter>,
) -> HttpResult<Json<AdminResponse<ContentListDto>>> {
    let notices = &state.services.notices;
    let resource = parse_resource(&resource, notices)?;
    state
        .services
        .content_queries
        .list_entities(ListEntitiesQuery { resource, filter })
        .await
        .into_http(notices)
        .map(|list| Json(AdminResponse::ok(list)))
}

#[utoipa::path(
    post,
    path = "/api/admin/{resource}",
    params(("resource" = String, Path, description = "Collection path")),
    request_body = ContentEntityDto,
    responses(
        (status = 201, description = "Entry created with slug and order defaults applied.", body = AdminResponse<ContentEntityDto>),
        (status = 400, description = "Required field missing; nothing was sent upstream.", body = ErrorResponse),
        (status = 422, description = "Rejected by the content API.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn create_entity(
    Extension(state): Extension<HttpState>,
    Path(resource): Path<String>,
    AdminJson(payload): AdminJson<ContentEntityDto>,
) -> HttpResult<(StatusCode, Json<AdminResponse<ContentEntityDto>>)> {
    let notices = &state.services.notices;
    let resource = parse_resource(&resource, notices)?;
    let created = state
        .services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource,
            fields: payload.0,
        })
        .await
        .into_http(notices)?;

    let response = AdminResponse::ok(ContentEntityDto::from(created))
        .with_notice(notices.success("Entry created"));
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/api/admin/{resource}/{id}",
    params(
        ("resource" = String, Path, description = "Collection path"),
        ("id" = String, Path, description = "Entry id")
    ),
    responses(
        (status = 200, description = "Entry deleted; other entries keep their order.", body = AdminResponse<DeletedResponse>),
        (status = 404, description = "Entry not found.", body = ErrorResponse)
    ),
    tag = "Content"
)]
pub async fn delete_entity(
    Extension(state): Extension<HttpState>,
    Path((resource, id)): Path<(String, String)>,
) -> HttpResult<Json<AdminResponse<DeletedResponse>>> {
    let notices = &state.services.notices;
    let resource = parse_resource(&resource, notices)?;
    state
        .services
        .content_commands
        .delete_entity(DeleteEntityCommand {
            resource,
            id: id.clone(),
        })
        .await
        .into_http(notices)?;

    Ok(Json(
        AdminResponse::ok(DeletedResponse { id }).with_notice(notices.success("Entry deleted")),
    ))
}
