// errors.rs
use thiserror::Error;

/// Errors originating from the server logic (routing, malformed requests)
/// rather than from the search itself, which the shell reports in-page.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Internal Server Error: {0}")]
    InternalError(String),
}
