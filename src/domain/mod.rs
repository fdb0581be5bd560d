pub mod article;
pub mod repository;
pub mod video;

pub use article::Article;
pub use repository::{RepositoryDetail, RepositorySummary};
pub use video::Video;

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing field. The backend passes
/// upstream values through, and GitHub sends `null` for an unset description.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
