use reqwest::StatusCode;
use thiserror::Error;

/// Why a search produced no listings. All variants surface to the user the
/// same way, as a banner carrying the display text.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The backend answered with a non-2xx status. Status and body are not inspected further.
    #[error("Failed to fetch cars")]
    Status(StatusCode),

    /// The request never got an answer (unreachable host, reset connection, timeout).
    #[error("{0}")]
    Transport(String),

    /// A 2xx answer whose body is not a JSON array of listings.
    #[error("Invalid search response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        SearchError::Transport(err.to_string())
    }
}
