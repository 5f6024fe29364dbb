use super::ContentCommandService;
use crate::{
    application::error::ApplicationResult,
    domain::content::{EntityId, ResourceKind},
};

pub struct DeleteEntityCommand {
    pub resource: ResourceKind,
    pub id: String,
}

impl ContentCommandService {
    /// Remove one entry. Remaining entries keep their `order`; gaps are fine.
    pub async fn delete_entity(&self, command: DeleteEntityCommand) -> ApplicationResult<()> {
        let id = EntityId::new(command.id)?;
        self.repo.delete(command.resource, &id).await?;
        tracing::info!(resource = %command.resource, %id, "entry deleted");
        Ok(())
    }
}
