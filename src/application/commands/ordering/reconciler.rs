// src/application/commands/ordering/reconciler.rs
use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        content::{ContentEntity, ContentRepository, EntityId, ListFilter, ResourceKind},
        errors::DomainResult,
        ordering::{MoveDirection, SwapPlan, display_sorted, plan_move},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    /// Target already at the edge in that direction; nothing was sent.
    Unchanged,
    /// Both updates succeeded; `items` is the refetched collection.
    Swapped { items: Vec<ContentEntity> },
}

/// Moves an entry one slot by swapping `order` with its neighbour.
///
/// The two updates are sent together and both are awaited whatever the
/// outcome of the other. There is no rollback: on failure the caller keeps
/// its last fetched list and the next fetch shows the real state.
pub struct OrderReconciler {
    repo: Arc<dyn ContentRepository>,
}

impl OrderReconciler {
    pub fn new(repo: Arc<dyn ContentRepository>) -> Self {
        Self { repo }
    }

    pub async fn reorder(
        &self,
        resource: ResourceKind,
        list: &[ContentEntity],
        target: &EntityId,
        direction: MoveDirection,
    ) -> ApplicationResult<ReorderOutcome> {
        ensure_orderable(resource)?;

        let Some(SwapPlan { target: moved, neighbour }) = plan_move(list, target, direction)?
        else {
            tracing::debug!(%resource, %target, %direction, "entry already at the edge");
            return Ok(ReorderOutcome::Unchanged);
        };

        let moved_id = moved.id().clone();
        let neighbour_id = neighbour.id().clone();

        let (moved_result, neighbour_result) = tokio::join!(
            self.repo.update(resource, moved),
            self.repo.update(resource, neighbour),
        );

        let failures = collect_failures([
            (&moved_id, moved_result),
            (&neighbour_id, neighbour_result),
        ]);
        if !failures.is_empty() {
            tracing::warn!(
                %resource,
                target = %moved_id,
                neighbour = %neighbour_id,
                failed = failures.len(),
                "reorder left in an unknown state"
            );
            return Err(ApplicationError::partial_failure(failures.join("; ")));
        }

        tracing::info!(
            %resource,
            target = %moved_id,
            neighbour = %neighbour_id,
            %direction,
            "entries swapped"
        );

        let items = self.repo.list(resource, &ListFilter::default()).await?;
        Ok(ReorderOutcome::Swapped {
            items: display_sorted(items),
        })
    }

    pub(super) fn repo(&self) -> &Arc<dyn ContentRepository> {
        &self.repo
    }
}

pub(super) fn ensure_orderable(resource: ResourceKind) -> ApplicationResult<()> {
    if resource.is_orderable() {
        Ok(())
    } else {
        Err(ApplicationError::validation(format!(
            "{resource} entries cannot be reordered"
        )))
    }
}

fn collect_failures<const N: usize>(
    results: [(&EntityId, DomainResult<ContentEntity>); N],
) -> Vec<String> {
    results
        .into_iter()
        .filter_map(|(id, result)| result.err().map(|err| (id, err)))
        .map(|(id, err)| {
            tracing::error!(%id, error = %err, "order update failed");
            format!("update of {id} failed: {err}")
        })
        .collect()
}
