#[derive(Debug, thiserror::Error)]
pub enum YgoError {
    #[error("Catalog fetch failed: {0}")]
    FetchFailed(String),

    #[error("Catalog decode failed: {0}")]
    DecodeFailed(#[from] serde_json::Error),

    #[error("Invalid card identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Empty query: {0}")]
    EmptyQuery(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl From<reqwest::Error> for YgoError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            return YgoError::FetchFailed(format!("unreadable response body: {e}"));
        }
        if e.is_timeout() {
            return YgoError::FetchFailed(format!("request timed out: {e}"));
        }
        YgoError::FetchFailed(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, YgoError>;
