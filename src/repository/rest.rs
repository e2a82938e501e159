//! [`EntityReader`]/[`EntityWriter`] over the backend's REST endpoints.

use std::fmt::Display;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use url::Url;

use crate::dto::api::{Page, PageRequest};
use crate::models::config::ClientConfig;
use crate::models::{Resource, WritableResource};
use crate::notifications::Notification;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{Acknowledged, EntityReader, EntityWriter};

pub const TOTAL_COUNT_HEADER: &str = "x-total-count";
const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Error body returned by the backend for failed requests.
#[derive(Debug, Default, Deserialize)]
struct ProblemDetails {
    title: Option<String>,
    detail: Option<String>,
}

impl ProblemDetails {
    fn into_message(self) -> Option<String> {
        self.detail
            .filter(|detail| !detail.trim().is_empty())
            .or(self.title)
    }
}

#[derive(Debug, Clone)]
pub struct RestRepository {
    http: Client,
    base_url: Url,
    app_name: String,
}

impl RestRepository {
    pub fn new(config: &ClientConfig) -> RepositoryResult<Self> {
        let mut base = config.api_base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)?;

        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
            app_name: config.app_name.clone(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn collection_url(&self, collection: &str) -> RepositoryResult<Url> {
        Ok(self.base_url.join(&format!("api/{collection}"))?)
    }

    fn entity_url(&self, collection: &str, id: impl Display) -> RepositoryResult<Url> {
        Ok(self.base_url.join(&format!("api/{collection}/{id}"))?)
    }

    /// Value of the `X-{app}-{suffix}` header, percent-decoded.
    fn app_header(&self, headers: &HeaderMap, suffix: &str) -> Option<String> {
        let name = format!("x-{}-{suffix}", self.app_name).to_ascii_lowercase();
        let raw = headers.get(name.as_str())?.to_str().ok()?;
        let decoded = url::form_urlencoded::parse(raw.as_bytes())
            .next()
            .map(|(value, _)| value.into_owned())
            .unwrap_or_else(|| raw.to_string());
        Some(decoded)
    }

    fn alert(&self, headers: &HeaderMap) -> Option<Notification> {
        let alert = self.app_header(headers, "alert")?;
        let param = self.app_header(headers, "params");
        Some(Notification::from_alert(&alert, param.as_deref()))
    }

    /// Passes 2xx responses through and turns the rest into errors carrying
    /// the backend's own message when it sent one.
    async fn check(&self, response: Response) -> RepositoryResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == StatusCode::NOT_FOUND {
            log::debug!("{} answered 404", response.url());
            return Err(RepositoryError::NotFound);
        }

        let url = response.url().clone();
        let header_message = self.app_header(response.headers(), "error");
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ProblemDetails>(&body)
            .ok()
            .and_then(ProblemDetails::into_message)
            .or(header_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        log::error!("Request to {url} failed with {status}: {message}");
        Err(RepositoryError::HttpError {
            status: status.as_u16(),
            message,
        })
    }

    async fn read_page<E: Resource>(&self, response: Response) -> RepositoryResult<Page<E>> {
        let total = response
            .headers()
            .get(TOTAL_COUNT_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.trim().parse::<usize>());
        let items: Vec<E> = response.json().await?;

        let page = match total {
            Some(Ok(total)) => Page::new(items, total),
            Some(Err(err)) => {
                log::warn!("Ignoring unparseable {TOTAL_COUNT_HEADER} header: {err}");
                Page::complete(items)
            }
            None => Page::complete(items),
        };
        Ok(page)
    }

    async fn read_entity<E: Resource>(
        &self,
        response: Response,
    ) -> RepositoryResult<Acknowledged<E>> {
        let response = self.check(response).await?;
        let alert = self.alert(response.headers());
        let value: E = response.json().await?;
        Ok(Acknowledged::new(value, alert))
    }
}

#[async_trait]
impl<E: Resource> EntityReader<E> for RestRepository {
    async fn list(&self, request: &PageRequest) -> RepositoryResult<Page<E>> {
        let url = self.collection_url(E::COLLECTION)?;
        log::debug!(
            "GET {url} page={} size={} sort={}",
            request.page,
            request.size,
            request.sort
        );
        let builder = self.http.get(url).query(&request.query_pairs());
        let response = self.check(builder.send().await?).await?;
        self.read_page(response).await
    }

    async fn list_all(&self) -> RepositoryResult<Vec<E>> {
        let url = self.collection_url(E::COLLECTION)?;
        log::debug!("GET {url}");
        let builder = self.http.get(url);
        let response = self.check(builder.send().await?).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: E::Id) -> RepositoryResult<E> {
        let url = self.entity_url(E::COLLECTION, id)?;
        log::debug!("GET {url}");
        let builder = self.http.get(url);
        let response = self.check(builder.send().await?).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl<E: WritableResource> EntityWriter<E> for RestRepository {
    async fn create(&self, new: &E::Create) -> RepositoryResult<Acknowledged<E>> {
        let url = self.collection_url(E::COLLECTION)?;
        let payload = E::create_payload(new)?;
        log::debug!("POST {url}");
        let builder = self.http.post(url).json(&payload);
        let response = builder.send().await?;
        self.read_entity(response).await
    }

    async fn update(&self, update: &E::Update) -> RepositoryResult<Acknowledged<E>> {
        let url = self.collection_url(E::COLLECTION)?;
        let payload = E::update_payload(update)?;
        log::debug!("PUT {url}");
        let builder = self.http.put(url).json(&payload);
        let response = builder.send().await?;
        self.read_entity(response).await
    }

    async fn patch(&self, id: E::Id, patch: &E::Patch) -> RepositoryResult<Acknowledged<E>> {
        let url = self.entity_url(E::COLLECTION, id)?;
        let body = serde_json::to_vec(&E::patch_payload(id, patch)?)?;
        log::debug!("PATCH {url}");
        let builder = self
            .http
            .patch(url)
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(body);
        let response = builder.send().await?;
        self.read_entity(response).await
    }

    async fn delete(&self, id: E::Id) -> RepositoryResult<Acknowledged<()>> {
        let url = self.entity_url(E::COLLECTION, id)?;
        log::debug!("DELETE {url}");
        let builder = self.http.delete(url);
        let response = self.check(builder.send().await?).await?;
        Ok(Acknowledged::new((), self.alert(response.headers())))
    }
}
