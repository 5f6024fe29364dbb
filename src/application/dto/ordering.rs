use crate::domain::ordering::MoveDirection;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ContentEntityDto;

/// Result of a move request. `items` is always a list fetched from the
/// content API: the refetch after a swap, or the list the move was planned
/// against when nothing moved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReorderDto {
    pub moved: bool,
    pub direction: MoveDirection,
    pub items: Vec<ContentEntityDto>,
}
