use crate::errors::ServerError;
use astra::Response;

// Type alias used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
