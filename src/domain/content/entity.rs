// src/domain/content/entity.rs
use crate::domain::content::value_objects::EntityId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::ordering::SortOrder;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const ID_KEYS: [&str; 2] = ["id", "_id"];
const ORDER_KEY: &str = "order";

/// A record of any dashboard collection. Only the id and the `order` field
/// are interpreted; every other field is carried through so that a full
/// `PUT` of the entity preserves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct ContentEntity {
    id: EntityId,
    fields: Map<String, Value>,
}

impl ContentEntity {
    pub fn from_fields(fields: Map<String, Value>) -> DomainResult<Self> {
        let id = ID_KEYS
            .iter()
            .find_map(|key| fields.get(*key))
            .ok_or_else(|| DomainError::Validation("entity has no id".into()))
            .and_then(EntityId::from_json)?;
        Ok(Self { id, fields })
    }

    pub fn id(&self) -> &EntityId {
        &self.id
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// Raw `order` value, if it is an integer (integral floats included).
    pub fn order(&self) -> Option<i64> {
        match self.fields.get(ORDER_KEY)? {
            Value::Number(n) => n.as_i64().or_else(|| {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0 && f.is_finite())
                    .map(|f| f as i64)
            }),
            _ => None,
        }
    }

    pub fn sort_order(&self) -> DomainResult<SortOrder> {
        self.order().map(SortOrder::new).ok_or_else(|| {
            DomainError::Validation(format!("entity {} has no integer order", self.id))
        })
    }

    pub fn with_order(mut self, order: SortOrder) -> Self {
        self.fields
            .insert(ORDER_KEY.to_string(), Value::from(order.value()));
        self
    }
}

impl TryFrom<Map<String, Value>> for ContentEntity {
    type Error = DomainError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_fields(fields)
    }
}

impl From<ContentEntity> for Map<String, Value> {
    fn from(entity: ContentEntity) -> Self {
        entity.fields
    }
}
