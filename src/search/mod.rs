mod client;
mod search_error;

pub use client::{HttpSearchClient, SearchBackend};
pub use search_error::SearchError;
