// tests/support/builders.rs
use movers_cms::domain::content::ContentEntity;
use serde_json::{Map, Value, json};

/// An orderable entry with `id`, `title` and `order`.
pub fn ranked(id: &str, order: i64) -> ContentEntity {
    entity(json!({ "id": id, "title": format!("Entry {id}"), "order": order }))
}

/// Ranked entries `1..=n` with `order` equal to their id.
pub fn ranked_list(n: i64) -> Vec<ContentEntity> {
    (1..=n).map(|i| ranked(&i.to_string(), i)).collect()
}

pub fn entity(value: Value) -> ContentEntity {
    ContentEntity::from_fields(fields(value)).expect("test entity must have an id")
}

pub fn fields(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}
