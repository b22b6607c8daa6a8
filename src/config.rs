use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} is not a valid URL: {reason}")]
    InvalidUrl { var: &'static str, reason: String },

    #[error("{var} has an invalid value {value:?}")]
    InvalidValue { var: &'static str, value: String },
}

/// Process settings, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the search backend.
    pub api_base: Url,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// `None` waits on the backend indefinitely.
    pub request_timeout: Option<Duration>,
    /// Directory holding vendored browser assets (`htmx.js`).
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base = lookup("DRIVESCOPE_API_URL").unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let api_base = Url::parse(&api_base).map_err(|e| ConfigError::InvalidUrl {
            var: "DRIVESCOPE_API_URL",
            reason: e.to_string(),
        })?;
        if !matches!(api_base.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                var: "DRIVESCOPE_API_URL",
                reason: format!("unsupported scheme {:?}", api_base.scheme()),
            });
        }

        let bind_addr = match lookup("DRIVESCOPE_ADDR") {
            Some(raw) => parse_var("DRIVESCOPE_ADDR", raw)?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let max_workers = match lookup("DRIVESCOPE_WORKERS") {
            Some(raw) => parse_var::<usize>("DRIVESCOPE_WORKERS", raw)?.max(1),
            None => DEFAULT_WORKERS,
        };

        let request_timeout = lookup("DRIVESCOPE_REQUEST_TIMEOUT_SECS")
            .map(|raw| parse_var("DRIVESCOPE_REQUEST_TIMEOUT_SECS", raw))
            .transpose()?
            .map(Duration::from_secs);

        let static_dir = lookup("DRIVESCOPE_STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
            .into();

        Ok(Self {
            api_base,
            bind_addr,
            max_workers,
            request_timeout,
            static_dir,
        })
    }

    /// `{api_base}/search`, keeping any path prefix on the base.
    pub fn search_endpoint(&self) -> Url {
        let mut endpoint = self.api_base.clone();
        let path = format!("{}/search", self.api_base.path().trim_end_matches('/'));
        endpoint.set_path(&path);
        endpoint
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var, value: raw })
}
