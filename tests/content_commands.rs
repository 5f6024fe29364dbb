// tests/content_commands.rs
use std::sync::Arc;

use movers_cms::application::commands::content::{CreateEntityCommand, DeleteEntityCommand};
use movers_cms::application::error::ApplicationError;
use movers_cms::application::queries::content::ListEntitiesQuery;
use movers_cms::domain::content::{ListFilter, ResourceKind};
use movers_cms::domain::errors::DomainError;
use serde_json::json;

mod support;

use support::{Call, RecordingContentRepo, build_services, fields, ranked, ranked_list};

#[tokio::test]
async fn missing_title_is_rejected_before_any_request() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let err = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Services,
            fields: fields(json!({ "title": "   ", "description": "Local moves" })),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Validation(_)), "{err}");
    assert!(err.to_string().contains("title is required"));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn statistics_require_a_label() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let err = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Statistics,
            fields: fields(json!({ "value": "1200" })),
        })
        .await
        .unwrap_err();

    assert!(err.to_string().contains("label is required"), "{err}");
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn new_service_gets_slug_and_next_order() {
    let repo = Arc::new(RecordingContentRepo::with_items(ranked_list(2)));
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Services,
            fields: fields(json!({ "title": "Café Müller!! Movers" })),
        })
        .await
        .unwrap();

    assert_eq!(created.fields()["slug"], "cafe-muller-movers");
    assert_eq!(created.order(), Some(3));
    assert_eq!(
        repo.calls(),
        vec![
            Call::List(ResourceKind::Services),
            Call::Create(ResourceKind::Services)
        ]
    );
}

#[tokio::test]
async fn explicit_order_skips_the_count_request() {
    let repo = Arc::new(RecordingContentRepo::with_items(ranked_list(2)));
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::WhyChooseUs,
            fields: fields(json!({ "title": "Insured crews", "order": 10 })),
        })
        .await
        .unwrap();

    assert_eq!(created.order(), Some(10));
    assert_eq!(repo.calls(), vec![Call::Create(ResourceKind::WhyChooseUs)]);
}

#[tokio::test]
async fn explicit_slug_is_normalized() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Blog,
            fields: fields(json!({
                "title": "Packing tips",
                "slug": "  My  Custom__Slug-- ",
            })),
        })
        .await
        .unwrap();

    assert_eq!(created.fields()["slug"], "my-custom-slug");
    assert_eq!(created.fields()["title"], "Packing tips");
    // Blog posts are not ranked.
    assert!(created.fields().get("order").is_none());
    assert_eq!(repo.calls(), vec![Call::Create(ResourceKind::Blog)]);
}

#[tokio::test]
async fn title_without_latin_letters_is_stored_with_empty_slug() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Blog,
            fields: fields(json!({ "title": "Переезд" })),
        })
        .await
        .unwrap();

    assert_eq!(created.fields()["slug"], "");
    assert_eq!(created.fields()["title"], "Переезд");
    assert_eq!(repo.calls(), vec![Call::Create(ResourceKind::Blog)]);
}

#[tokio::test]
async fn punctuation_only_slug_falls_back_to_empty() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Services,
            fields: fields(json!({ "title": "!!!", "slug": "???", "order": 4 })),
        })
        .await
        .unwrap();

    assert_eq!(created.fields()["slug"], "");
    assert_eq!(created.order(), Some(4));
}

#[tokio::test]
async fn plain_sections_pass_fields_through() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let created = services
        .content_commands
        .create_entity(CreateEntityCommand {
            resource: ResourceKind::Gallery,
            fields: fields(json!({ "id": "g1", "caption": "Moving day" })),
        })
        .await
        .unwrap();

    assert_eq!(created.id().as_str(), "g1");
    assert!(created.fields().get("slug").is_none());
    assert_eq!(repo.calls(), vec![Call::Create(ResourceKind::Gallery)]);
}

#[tokio::test]
async fn delete_sends_one_request_and_keeps_gaps() {
    let repo = Arc::new(RecordingContentRepo::with_items(ranked_list(3)));
    let services = build_services(repo.clone());

    services
        .content_commands
        .delete_entity(DeleteEntityCommand {
            resource: ResourceKind::Services,
            id: "2".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        repo.calls(),
        vec![Call::Delete(ResourceKind::Services, "2".into())]
    );
    assert_eq!(repo.order_of("1"), Some(1));
    assert_eq!(repo.order_of("3"), Some(3));
}

#[tokio::test]
async fn delete_with_blank_id_is_rejected_locally() {
    let repo = Arc::new(RecordingContentRepo::default());
    let services = build_services(repo.clone());

    let err = services
        .content_commands
        .delete_entity(DeleteEntityCommand {
            resource: ResourceKind::Team,
            id: " ".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ApplicationError::Domain(DomainError::Validation(_))
    ));
    assert!(repo.calls().is_empty());
}

#[tokio::test]
async fn ranked_lists_come_back_sorted() {
    let items = vec![ranked("c", 3), ranked("a", 1), ranked("b", 2)];
    let repo = Arc::new(RecordingContentRepo::with_items(items));
    let services = build_services(repo.clone());
    let filter = ListFilter {
        search: Some("crew".into()),
        ..ListFilter::default()
    };

    let list = services
        .content_queries
        .list_entities(ListEntitiesQuery {
            resource: ResourceKind::Statistics,
            filter: filter.clone(),
        })
        .await
        .unwrap();

    let ids: Vec<&str> = list
        .items
        .iter()
        .map(|dto| dto.0["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["a", "b", "c"]);
    assert_eq!(repo.last_filter(), Some(filter));
}

#[tokio::test]
async fn unranked_lists_keep_api_order() {
    let items = vec![ranked("c", 3), ranked("a", 1)];
    let repo = Arc::new(RecordingContentRepo::with_items(items));
    let services = build_services(repo.clone());

    let list = services
        .content_queries
        .list_entities(ListEntitiesQuery {
            resource: ResourceKind::Testimonials,
            filter: ListFilter::default(),
        })
        .await
        .unwrap();

    assert_eq!(list.items[0].0["id"], "c");
}
