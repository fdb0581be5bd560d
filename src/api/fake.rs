//! In-memory [`PortfolioApi`] for tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layer};

use super::PortfolioApi;
use crate::app::{FolioError, Result};
use crate::domain::{Article, RepositoryDetail, RepositorySummary, Video};

#[derive(Default)]
pub struct FakeApi {
    pub repos: Vec<RepositorySummary>,
    pub articles: Vec<Article>,
    pub videos: Vec<Video>,
    pub fail: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeApi {
    pub fn with_demo_repo() -> Self {
        Self {
            repos: vec![serde_json::from_value(json!({
                "repo_id": "r1",
                "name": "demo",
                "language": "Go",
                "stars": 10,
                "forks": 2,
                "description": "x",
                "high_level_summary": "y"
            }))
            .unwrap()],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Paths requested so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, path: String) -> Result<()> {
        self.calls.lock().unwrap().push(path);
        if self.fail {
            return Err(FolioError::Network("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl PortfolioApi for FakeApi {
    async fn list_repositories(&self) -> Result<Vec<RepositorySummary>> {
        self.record("/api/repos".to_string())?;
        Ok(self.repos.clone())
    }

    async fn get_repository(&self, id: &str) -> Result<RepositoryDetail> {
        self.record(format!("/api/repos/{}", id))?;
        let summary = self
            .repos
            .iter()
            .find(|repo| repo.repo_id == id)
            .cloned()
            .ok_or_else(|| FolioError::Network("HTTP status client error (404 Not Found)".into()))?;
        Ok(RepositoryDetail {
            summary,
            detailed_summary: "z".to_string(),
        })
    }

    async fn list_articles(&self) -> Result<Vec<Article>> {
        self.record("/api/posts".to_string())?;
        Ok(self.articles.clone())
    }

    async fn list_videos(&self) -> Result<Vec<Video>> {
        self.record("/api/videos".to_string())?;
        Ok(self.videos.clone())
    }
}

/// Counts ERROR-level events.
#[derive(Clone, Default)]
pub struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == tracing::Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}
