use super::ContentCommandService;
use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        content::{ContentEntity, ListFilter, ResourceKind},
        ordering::next_order,
        slug::Slug,
    },
};
use serde_json::{Map, Value};

pub struct CreateEntityCommand {
    pub resource: ResourceKind,
    pub fields: Map<String, Value>,
}

fn non_blank<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.trim().is_empty())
}

impl ContentCommandService {
    /// Create an entry, filling in `slug` and `order` where the collection
    /// uses them and the caller left them out.
    ///
    /// Missing required fields are rejected before any request is made.
    pub async fn create_entity(
        &self,
        command: CreateEntityCommand,
    ) -> ApplicationResult<ContentEntity> {
        let CreateEntityCommand {
            resource,
            mut fields,
        } = command;

        let missing = resource
            .required_field()
            .filter(|required| non_blank(&fields, required).is_none());
        if let Some(required) = missing {
            return Err(ApplicationError::validation(format!(
                "{required} is required"
            )));
        }

        if resource.is_slugged() {
            let slug = self.resolve_slug(&fields)?;
            let slug = slug.map(Slug::into_inner).unwrap_or_default();
            fields.insert("slug".into(), Value::String(slug));
        }

        if resource.is_orderable() && !fields.contains_key("order") {
            let existing = self.repo.list(resource, &ListFilter::default()).await?;
            let order = next_order(existing.len());
            tracing::debug!(%resource, %order, "assigning order to new entry");
            fields.insert("order".into(), Value::from(order.value()));
        }

        let created = self.repo.create(resource, fields).await?;
        tracing::info!(%resource, id = %created.id(), "entry created");
        Ok(created)
    }

    /// `None` when neither slug nor title has a letter or digit; the entry
    /// is then stored with an empty slug, which reads as "not yet set".
    fn resolve_slug(&self, fields: &Map<String, Value>) -> ApplicationResult<Option<Slug>> {
        let source = non_blank(fields, "slug")
            .or_else(|| non_blank(fields, "title"))
            .unwrap_or_default();
        let slug = self.slugger.slugify(source);
        if slug.is_empty() {
            return Ok(None);
        }
        Ok(Some(Slug::new(slug)?))
    }
}
