use thiserror::Error;

#[derive(Error, Debug)]
pub enum FolioError {
    /// Transport failure, non-success status or an unparseable body.
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown route: {0} (expected one of /, /github, /medium, /youtube)")]
    UnknownRoute(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for FolioError {
    fn from(err: reqwest::Error) -> Self {
        FolioError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Network(format!("malformed response body: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, FolioError>;
