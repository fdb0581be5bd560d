use async_trait::async_trait;
use reqwest::header::{HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::api::PortfolioApi;
use crate::app::{FolioError, Result};
use crate::domain::{Article, RepositoryDetail, RepositorySummary, Video};

pub struct HttpApiClient {
    client: Client,
    base: Url,
}

impl HttpApiClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url.trim())?;
        if base.cannot_be_a_base() {
            return Err(FolioError::Config(format!(
                "API base URL must be hierarchical: {}",
                base
            )));
        }

        let client = Client::builder()
            .gzip(true)
            .brotli(true)
            .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, base))
    }

    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve `segments` below the base URL, keeping any path prefix the base
    /// carries (e.g. an API Gateway stage). Segments are percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| FolioError::Config(format!("API base URL cannot be a base: {}", self.base)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .send()
            .await?;

        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        let parsed = serde_json::from_slice(&body)?;
        tracing::debug!("GET {} returned {} bytes", url, body.len());
        Ok(parsed)
    }
}

#[async_trait]
impl PortfolioApi for HttpApiClient {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>> {
        self.get_json(self.endpoint(&["api", "repos"])?).await
    }

    async fn get_repository(&self, id: &str) -> Result<RepositoryDetail> {
        self.get_json(self.endpoint(&["api", "repos", id])?).await
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        self.get_json(self.endpoint(&["api", "posts"])?).await
    }

    async fn list_videos(&self) -> Result<Vec<Video>> {
        self.get_json(self.endpoint(&["api", "videos"])?).await
    }
}
