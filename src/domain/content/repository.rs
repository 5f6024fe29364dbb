use crate::domain::content::entity::ContentEntity;
use crate::domain::content::value_objects::{EntityId, ListFilter, ResourceKind};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use serde_json::{Map, Value};

/// The collaborating content API. Implementations must not retry mutations.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list(
        &self,
        resource: ResourceKind,
        filter: &ListFilter,
    ) -> DomainResult<Vec<ContentEntity>>;

    async fn create(
        &self,
        resource: ResourceKind,
        fields: Map<String, Value>,
    ) -> DomainResult<ContentEntity>;

    async fn update(
        &self,
        resource: ResourceKind,
        entity: ContentEntity,
    ) -> DomainResult<ContentEntity>;

    async fn delete(&self, resource: ResourceKind, id: &EntityId) -> DomainResult<()>;
}
