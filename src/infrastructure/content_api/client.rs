// src/infrastructure/content_api/client.rs
use async_trait::async_trait;
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::{
    envelope::ApiEnvelope,
    error::{map_rejection, map_reqwest},
};
use crate::domain::{
    content::{ContentEntity, ContentRepository, EntityId, ListFilter, ResourceKind},
    errors::{DomainError, DomainResult},
};

/// [`ContentRepository`] backed by the dashboard's REST API
/// (`/api/<resource>[/<id>]`). Requests are sent once; nothing is retried.
#[derive(Debug, Clone)]
pub struct HttpContentApi {
    http: Client,
    base_url: Url,
}

impl HttpContentApi {
    pub fn new(base_url: Url) -> DomainResult<Self> {
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Validation(format!(
                "content api url {base_url} cannot be used as a base"
            )));
        }
        let http = Client::builder()
            .user_agent(concat!("movers_cms/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(map_reqwest)?;
        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, resource: ResourceKind, id: Option<&EntityId>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push("api").push(resource.as_path());
            if let Some(id) = id {
                segments.push(id.as_str());
            }
        }
        url
    }

    async fn send(&self, method: Method, url: Url, body: Option<&Map<String, Value>>) -> DomainResult<Response> {
        tracing::debug!(%method, %url, "content api request");
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        request.send().await.map_err(map_reqwest)
    }
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> DomainResult<Option<T>> {
    let status = response.status();
    let bytes = response.bytes().await.map_err(map_reqwest)?;

    let envelope: ApiEnvelope<T> = match serde_json::from_slice(&bytes) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(map_rejection(status, None)),
        Err(err) => {
            return Err(DomainError::Transport(format!(
                "malformed content api response: {err}"
            )));
        }
    };

    if !envelope.success || !status.is_success() {
        return Err(map_rejection(status, envelope.message));
    }
    Ok(envelope.data)
}

#[async_trait]
impl ContentRepository for HttpContentApi {
    async fn list(
        &self,
        resource: ResourceKind,
        filter: &ListFilter,
    ) -> DomainResult<Vec<ContentEntity>> {
        let mut url = self.endpoint(resource, None);
        let pairs = filter.query_pairs();
        if !pairs.is_empty() {
            let query = serde_urlencoded::to_string(&pairs)
                .map_err(|err| DomainError::Validation(format!("invalid list filter: {err}")))?;
            url.set_query(Some(&query));
        }

        let response = self.send(Method::GET, url, None).await?;
        Ok(read_envelope(response).await?.unwrap_or_default())
    }

    async fn create(
        &self,
        resource: ResourceKind,
        fields: Map<String, Value>,
    ) -> DomainResult<ContentEntity> {
        let url = self.endpoint(resource, None);
        let response = self.send(Method::POST, url, Some(&fields)).await?;
        read_envelope(response)
            .await?
            .ok_or_else(|| DomainError::Transport("content api returned no created entity".into()))
    }

    async fn update(
        &self,
        resource: ResourceKind,
        entity: ContentEntity,
    ) -> DomainResult<ContentEntity> {
        let url = self.endpoint(resource, Some(entity.id()));
        let response = self.send(Method::PUT, url, Some(entity.fields())).await?;
        Ok(read_envelope(response).await?.unwrap_or(entity))
    }

    async fn delete(&self, resource: ResourceKind, id: &EntityId) -> DomainResult<()> {
        let url = self.endpoint(resource, Some(id));
        let response = self.send(Method::DELETE, url, None).await?;
        read_envelope::<Value>(response).await?;
        Ok(())
    }
}
