use crate::application::{
    commands::ordering::MoveEntityCommand,
    dto::{AdminResponse, ReorderDto},
};
use crate::domain::ordering::MoveDirection;
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::AdminJson;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::parse_resource;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MoveRequest {
    pub direction: MoveDirection,
}

#[utoipa::path(
    post,
    path = "/api/admin/{resource}/{id}/move",
    params(
        ("resource" = String, Path, description = "Orderable collection: services, statistics or why-choose-us"),
        ("id" = String, Path, description = "Entry to move")
    ),
    request_body = MoveRequest,
    responses(
        (status = 200, description = "Swap persisted and list refetched, or nothing to do at the edge.", body = AdminResponse<ReorderDto>),
        (status = 400, description = "Collection is not orderable.", body = ErrorResponse),
        (status = 404, description = "Entry not in the collection.", body = ErrorResponse),
        (status = 502, description = "One of the paired updates failed; refetch to see the current state.", body = ErrorResponse)
    ),
    tag = "Ordering"
)]
pub async fn move_entity(
    Extension(state): Extension<HttpState>,
    Path((resource, id)): Path<(String, String)>,
    AdminJson(payload): AdminJson<MoveRequest>,
) -> HttpResult<Json<AdminResponse<ReorderDto>>> {
    let notices = &state.services.notices;
    let resource = parse_resource(&resource, notices)?;
    let result = state
        .services
        .reconciler
        .move_entity(MoveEntityCommand {
            resource,
            id,
            direction: payload.direction,
        })
        .await
        .into_http(notices)?;

    let response = if result.moved {
        let message = format!("Moved {}", result.direction);
        AdminResponse::ok(result).with_notice(notices.success(message))
    } else {
        AdminResponse::ok(result)
    };
    Ok(Json(response))
}
