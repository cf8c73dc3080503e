//! Fetching raw metadata bytes from files and URLs.

use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::{GeometaError, Result};

use super::source::Source;

/// Default HTTP request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for the default fetcher.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Timeout applied to each HTTP request.
    pub timeout: Duration,
    /// User-Agent header sent with HTTP requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("geometa/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl FetchConfig {
    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// Retrieves the raw bytes of a metadata record.
///
/// Implementations decide how URLs and paths are read; [`Fetcher::fetch`]
/// guarantees that a URL source only reaches [`Fetcher::fetch_url`] and a
/// path source only reaches [`Fetcher::fetch_file`].
pub trait Fetcher {
    /// Read a remote record.
    fn fetch_url(&self, url: &str) -> Result<Vec<u8>>;

    /// Read a local record.
    fn fetch_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Read a record from whichever place `source` names.
    fn fetch(&self, source: &Source) -> Result<Vec<u8>> {
        match source {
            Source::Url(url) => self.fetch_url(url),
            Source::File(path) => self.fetch_file(path),
        }
    }
}

/// Default fetcher: blocking HTTP for URLs, `std::fs` for paths.
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Create a fetcher with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(FetchConfig::default())
    }

    /// Create a fetcher with custom configuration.
    pub fn with_config(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()
            .map_err(|e| GeometaError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_url(&self, url: &str) -> Result<Vec<u8>> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(GeometaError::UnsupportedScheme(url.to_string()));
        }

        tracing::debug!(url, "fetching remote metadata");
        let response = self.client.get(url).send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeometaError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes()?;
        tracing::debug!(url, bytes = body.len(), "fetched remote metadata");
        Ok(body.to_vec())
    }

    fn fetch_file(&self, path: &Path) -> Result<Vec<u8>> {
        tracing::debug!(path = %path.display(), "reading metadata file");
        std::fs::read(path).map_err(|e| GeometaError::Io {
            path: path.to_path_buf(),
            source: e,
        })
    }
}
