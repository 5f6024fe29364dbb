use super::ContentQueryService;
use crate::{
    application::{dto::ContentListDto, error::ApplicationResult},
    domain::{
        content::{ListFilter, ResourceKind},
        ordering::display_sorted,
    },
};

pub struct ListEntitiesQuery {
    pub resource: ResourceKind,
    pub filter: ListFilter,
}

impl ContentQueryService {
    pub async fn list_entities(&self, query: ListEntitiesQuery) -> ApplicationResult<ContentListDto> {
        let records = self.repo.list(query.resource, &query.filter).await?;
        let records = if query.resource.is_orderable() {
            display_sorted(records)
        } else {
            records
        };
        Ok(records.into())
    }
}
