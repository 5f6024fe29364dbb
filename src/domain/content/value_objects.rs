use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::{fmt, str::FromStr};
use utoipa::{IntoParams, ToSchema};

/// Dashboard sections backed by `/api/<resource>` on the content API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ResourceKind {
    About,
    Blog,
    ContactInfo,
    Gallery,
    Seo,
    ServiceAreas,
    Services,
    Statistics,
    Team,
    Testimonials,
    WelcomeSection,
    WhyChooseUs,
}

impl ResourceKind {
    pub const ALL: [Self; 12] = [
        Self::About,
        Self::Blog,
        Self::ContactInfo,
        Self::Gallery,
        Self::Seo,
        Self::ServiceAreas,
        Self::Services,
        Self::Statistics,
        Self::Team,
        Self::Testimonials,
        Self::WelcomeSection,
        Self::WhyChooseUs,
    ];

    pub fn as_path(&self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Blog => "blog",
            Self::ContactInfo => "contact-info",
            Self::Gallery => "gallery",
            Self::Seo => "seo",
            Self::ServiceAreas => "service-areas",
            Self::Services => "services",
            Self::Statistics => "statistics",
            Self::Team => "team",
            Self::Testimonials => "testimonials",
            Self::WelcomeSection => "welcome-section",
            Self::WhyChooseUs => "why-choose-us",
        }
    }

    /// Collections whose display position is driven by an integer `order`.
    pub fn is_orderable(&self) -> bool {
        matches!(self, Self::Services | Self::Statistics | Self::WhyChooseUs)
    }

    /// Collections whose entries carry a `slug` derived from `title`.
    pub fn is_slugged(&self) -> bool {
        matches!(self, Self::Blog | Self::Services)
    }

    pub fn required_field(&self) -> Option<&'static str> {
        match self {
            Self::Blog | Self::Services | Self::WhyChooseUs => Some("title"),
            Self::Statistics => Some("label"),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_path() == s)
            .ok_or_else(|| DomainError::Validation(format!("unknown resource: {s}")))
    }
}

/// Identifier assigned by the content API. Numeric and string ids are both
/// accepted and kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("entity id cannot be empty".into()));
        }
        Ok(Self(value))
    }

    pub fn from_json(value: &Value) -> DomainResult<Self> {
        match value {
            Value::String(s) => Self::new(s.clone()),
            Value::Number(n) => Self::new(n.to_string()),
            other => Err(DomainError::Validation(format!(
                "entity id must be a string or a number, got {other}"
            ))),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<EntityId> for String {
    fn from(value: EntityId) -> Self {
        value.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListFilter {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

impl ListFilter {
    /// Query pairs in a stable order, blank values dropped.
    pub fn query_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            ("search", self.search.as_deref()),
            ("status", self.status.as_deref()),
            ("category", self.category.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| (key, v))
        })
        .collect()
    }
}
