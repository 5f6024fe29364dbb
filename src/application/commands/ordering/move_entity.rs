use super::{OrderReconciler, ReorderOutcome, reconciler::ensure_orderable};
use crate::{
    application::{
        dto::{ContentEntityDto, ReorderDto},
        error::ApplicationResult,
    },
    domain::{
        content::{EntityId, ListFilter, ResourceKind},
        ordering::{MoveDirection, display_sorted},
    },
};

pub struct MoveEntityCommand {
    pub resource: ResourceKind,
    pub id: String,
    pub direction: MoveDirection,
}

impl OrderReconciler {
    /// Fetch the collection, then [`reorder`](Self::reorder) against it.
    pub async fn move_entity(&self, command: MoveEntityCommand) -> ApplicationResult<ReorderDto> {
        let MoveEntityCommand {
            resource,
            id,
            direction,
        } = command;
        ensure_orderable(resource)?;
        let target = EntityId::new(id)?;

        let current = display_sorted(self.repo().list(resource, &ListFilter::default()).await?);
        let outcome = self.reorder(resource, &current, &target, direction).await?;

        let (moved, items) = match outcome {
            ReorderOutcome::Unchanged => (false, current),
            ReorderOutcome::Swapped { items } => (true, items),
        };

        Ok(ReorderDto {
            moved,
            direction,
            items: items.into_iter().map(ContentEntityDto::from).collect(),
        })
    }
}
