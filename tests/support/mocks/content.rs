// tests/support/mocks/content.rs
use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use movers_cms::domain::content::{
    ContentEntity, ContentRepository, EntityId, ListFilter, ResourceKind,
};
use movers_cms::domain::errors::{DomainError, DomainResult};
use serde_json::{Map, Value};

/// One request the gateway made against the content API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List(ResourceKind),
    Create(ResourceKind),
    Update {
        resource: ResourceKind,
        id: String,
        order: Option<i64>,
    },
    Delete(ResourceKind, String),
}

/// In-memory content API that records every call. Holds a single
/// collection regardless of the resource asked for.
#[derive(Default)]
pub struct RecordingContentRepo {
    items: Mutex<Vec<ContentEntity>>,
    calls: Mutex<Vec<Call>>,
    failing_updates: Mutex<HashSet<String>>,
    failing_lists: Mutex<bool>,
    last_filter: Mutex<Option<ListFilter>>,
}

impl RecordingContentRepo {
    pub fn with_items(items: Vec<ContentEntity>) -> Self {
        let repo = Self::default();
        *repo.items.lock().unwrap() = items;
        repo
    }

    /// Updates of `id` are refused with a rejection from now on.
    pub fn fail_updates_of(&self, id: &str) {
        self.failing_updates.lock().unwrap().insert(id.to_string());
    }

    /// Every list call after this one fails as if the API were down.
    pub fn fail_lists(&self) {
        *self.failing_lists.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|call| matches!(call, Call::List(_)))
            .count()
    }

    pub fn updates(&self) -> Vec<(String, Option<i64>)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Update { id, order, .. } => Some((id, order)),
                _ => None,
            })
            .collect()
    }

    pub fn items(&self) -> Vec<ContentEntity> {
        self.items.lock().unwrap().clone()
    }

    pub fn last_filter(&self) -> Option<ListFilter> {
        self.last_filter.lock().unwrap().clone()
    }

    pub fn order_of(&self, id: &str) -> Option<i64> {
        self.items()
            .iter()
            .find(|entity| entity.id().as_str() == id)
            .and_then(ContentEntity::order)
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl ContentRepository for RecordingContentRepo {
    async fn list(
        &self,
        resource: ResourceKind,
        filter: &ListFilter,
    ) -> DomainResult<Vec<ContentEntity>> {
        self.record(Call::List(resource));
        *self.last_filter.lock().unwrap() = Some(filter.clone());
        if *self.failing_lists.lock().unwrap() {
            return Err(DomainError::Transport("connection refused".into()));
        }
        Ok(self.items())
    }

    async fn create(
        &self,
        resource: ResourceKind,
        mut fields: Map<String, Value>,
    ) -> DomainResult<ContentEntity> {
        self.record(Call::Create(resource));
        let mut items = self.items.lock().unwrap();
        if !fields.contains_key("id") {
            let next = items.len() + 1;
            fields.insert("id".into(), Value::String(format!("new-{next}")));
        }
        let entity = ContentEntity::from_fields(fields)?;
        items.push(entity.clone());
        Ok(entity)
    }

    async fn update(
        &self,
        resource: ResourceKind,
        entity: ContentEntity,
    ) -> DomainResult<ContentEntity> {
        let id = entity.id().as_str().to_string();
        self.record(Call::Update {
            resource,
            id: id.clone(),
            order: entity.order(),
        });
        if self.failing_updates.lock().unwrap().contains(&id) {
            return Err(DomainError::Rejected(format!("update of {id} refused")));
        }
        let mut items = self.items.lock().unwrap();
        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == entity.id())
            .ok_or_else(|| DomainError::NotFound(format!("no entry {id}")))?;
        *slot = entity.clone();
        Ok(entity)
    }

    async fn delete(&self, resource: ResourceKind, id: &EntityId) -> DomainResult<()> {
        self.record(Call::Delete(resource, id.as_str().to_string()));
        let mut items = self.items.lock().unwrap();
        let before = items.len();
        items.retain(|entity| entity.id() != id);
        if items.len() == before {
            return Err(DomainError::NotFound(format!("no entry {id}")));
        }
        Ok(())
    }
}

/// Content API whose `update` only returns once two updates are waiting at
/// the same time. Lists return the seeded items unchanged.
pub struct RendezvousContentRepo {
    items: Vec<ContentEntity>,
    barrier: tokio::sync::Barrier,
    updates: Mutex<Vec<String>>,
}

impl RendezvousContentRepo {
    pub fn new(items: Vec<ContentEntity>) -> Self {
        Self {
            items,
            barrier: tokio::sync::Barrier::new(2),
            updates: Mutex::new(Vec::new()),
        }
    }

    pub fn updated_ids(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContentRepository for RendezvousContentRepo {
    async fn list(
        &self,
        _resource: ResourceKind,
        _filter: &ListFilter,
    ) -> DomainResult<Vec<ContentEntity>> {
        Ok(self.items.clone())
    }

    async fn create(
        &self,
        _resource: ResourceKind,
        fields: Map<String, Value>,
    ) -> DomainResult<ContentEntity> {
        ContentEntity::from_fields(fields)
    }

    async fn update(
        &self,
        _resource: ResourceKind,
        entity: ContentEntity,
    ) -> DomainResult<ContentEntity> {
        self.barrier.wait().await;
        self.updates
            .lock()
            .unwrap()
            .push(entity.id().as_str().to_string());
        Ok(entity)
    }

    async fn delete(&self, _resource: ResourceKind, _id: &EntityId) -> DomainResult<()> {
        Ok(())
    }
}
