use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A repository as returned by `GET /api/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub repo_id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stars: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub forks: u64,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high_level_summary: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl RepositorySummary {
    pub fn display_language(&self) -> &str {
        self.language.as_deref().unwrap_or("Unknown")
    }
}

/// A repository as returned by `GET /api/repos/{id}`: the summary fields
/// plus the long-form summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryDetail {
    #[serde(flatten)]
    pub summary: RepositorySummary,
    #[serde(default, deserialize_with = "null_as_default")]
    pub detailed_summary: String,
}

impl RepositoryDetail {
    pub fn display_language(&self) -> &str {
        self.summary.display_language()
    }
}
