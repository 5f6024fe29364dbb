use crate::domain::content::ContentEntity;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;

/// A content record as returned by the content API, fields untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
#[schema(value_type = Object)]
pub struct ContentEntityDto(pub Map<String, Value>);

impl From<ContentEntity> for ContentEntityDto {
    fn from(entity: ContentEntity) -> Self {
        Self(entity.into_fields())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContentListDto {
    pub items: Vec<ContentEntityDto>,
}

impl From<Vec<ContentEntity>> for ContentListDto {
    fn from(entities: Vec<ContentEntity>) -> Self {
        Self {
            items: entities.into_iter().map(Into::into).collect(),
        }
    }
}
