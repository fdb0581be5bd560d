pub mod http_client;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::app::Result;
use crate::domain::{Article, RepositoryDetail, RepositorySummary, Video};

/// Environment variable selecting the API base origin.
pub const API_URL_ENV: &str = "PORTFOLIO_API_URL";

/// Placeholder origin used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://your-api-gateway-url.execute-api.us-east-1.amazonaws.com";

/// The aggregation backend. Every call is a fresh GET; nothing is cached.
#[async_trait]
pub trait PortfolioApi {
    /// `GET /api/repos`
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>>;

    /// `GET /api/repos/{id}`
    async fn get_repository(&self, id: &str) -> Result<RepositoryDetail>;

    /// `GET /api/posts`
    async fn list_articles(&self) -> Result<Vec<Article>>;

    /// `GET /api/videos`
    async fn list_videos(&self) -> Result<Vec<Video>>;
}
