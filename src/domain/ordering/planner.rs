// src/domain/ordering/planner.rs
use crate::domain::content::{ContentEntity, EntityId};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ordering::value_objects::{MoveDirection, SortOrder};

/// The two updates that move an entity one slot: each side takes the other's
/// original `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwapPlan {
    pub target: ContentEntity,
    pub neighbour: ContentEntity,
}

/// Sort a collection ascending by `order`. Every entry must carry an
/// integer order; ties keep their incoming relative position.
pub fn sorted_by_order(entities: &[ContentEntity]) -> DomainResult<Vec<ContentEntity>> {
    let mut keyed = entities
        .iter()
        .map(|entity| entity.sort_order().map(|order| (order, entity.clone())))
        .collect::<DomainResult<Vec<_>>>()?;
    keyed.sort_by_key(|(order, _)| *order);
    Ok(keyed.into_iter().map(|(_, entity)| entity).collect())
}

/// Sort for display without failing: entries lacking an order go last.
pub fn display_sorted(mut entities: Vec<ContentEntity>) -> Vec<ContentEntity> {
    entities.sort_by_key(|entity| entity.order().unwrap_or(i64::MAX));
    entities
}

/// Work out the swap for moving `target` one slot in `direction`.
///
/// Returns `Ok(None)` when the target already sits at the matching end of
/// the list; callers must treat that as a no-op and issue no requests.
pub fn plan_move(
    entities: &[ContentEntity],
    target: &EntityId,
    direction: MoveDirection,
) -> DomainResult<Option<SwapPlan>> {
    let sorted = sorted_by_order(entities)?;
    let index = sorted
        .iter()
        .position(|entity| entity.id() == target)
        .ok_or_else(|| DomainError::NotFound(format!("entity {target} not found")))?;

    let Some(neighbour_index) = direction.neighbour_of(index, sorted.len()) else {
        return Ok(None);
    };

    let current = &sorted[index];
    let neighbour = &sorted[neighbour_index];
    let current_order = current.sort_order()?;
    let neighbour_order = neighbour.sort_order()?;

    if current_order == neighbour_order {
        return Err(DomainError::Conflict(format!(
            "entities {} and {} share order {current_order}",
            current.id(),
            neighbour.id()
        )));
    }

    Ok(Some(SwapPlan {
        target: current.clone().with_order(neighbour_order),
        neighbour: neighbour.clone().with_order(current_order),
    }))
}

/// Order assigned to a newly created entry: collection size + 1.
pub fn next_order(current_len: usize) -> SortOrder {
    SortOrder::new(i64::try_from(current_len).map_or(i64::MAX, |len| len.saturating_add(1)))
}
