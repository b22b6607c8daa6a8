// client.rs
use crate::config::Config;
use crate::domain::{Listing, SearchFilters};
use crate::search::SearchError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = concat!("drivescope/", env!("CARGO_PKG_VERSION"));

/// Anything that can answer a filtered listing search.
pub trait SearchBackend: Send + Sync + 'static {
    fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>, SearchError>;
}

/// Blocking JSON client for `POST {API_BASE}/search`.
pub struct HttpSearchClient {
    client: Client,
    endpoint: Url,
}

impl HttpSearchClient {
    pub fn new(config: &Config) -> Result<Self, SearchError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.search_endpoint(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

impl SearchBackend for HttpSearchClient {
    fn search(&self, filters: &SearchFilters) -> Result<Vec<Listing>, SearchError> {
        let resp = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .json(filters)
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            debug!(%status, "search backend rejected request");
            return Err(SearchError::Status(status));
        }

        let text = resp.text()?;
        serde_json::from_str(&text).map_err(|e| SearchError::Decode(e.to_string()))
    }
}
