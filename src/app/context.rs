use std::sync::Arc;

use url::Url;

use crate::api::http_client::HttpApiClient;
use crate::api::PortfolioApi;
use crate::app::error::Result;

pub struct AppContext {
    pub api: Arc<dyn PortfolioApi + Send + Sync>,
    pub api_url: Url,
}

impl AppContext {
    pub fn new(api_url: &str) -> Result<Self> {
        let client = HttpApiClient::new(api_url)?;
        let api_url = client.base_url().clone();
        tracing::info!("Using API base URL: {}", api_url);

        Ok(Self {
            api: Arc::new(client),
            api_url,
        })
    }

    /// Build a context around an arbitrary backend, e.g. a canned one in tests.
    pub fn with_api(api: Arc<dyn PortfolioApi + Send + Sync>, api_url: Url) -> Self {
        Self { api, api_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_validated_base_url() {
        let ctx = AppContext::new("https://api.example.com/prod").unwrap();
        assert_eq!(ctx.api_url.as_str(), "https://api.example.com/prod");
    }

    #[test]
    fn test_new_rejects_garbage() {
        assert!(AppContext::new("not a url").is_err());
    }
}
