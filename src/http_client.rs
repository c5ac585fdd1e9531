//! HTTP client shared by every resolution strategy
//!
//! Features:
//! - Explicit connect and per-request timeouts (upstreams are third parties)
//! - Gzip/Deflate/Brotli decompression
//! - Bounded redirects
//! - Optional browser header profile per request

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::config::NewsConfig;
use crate::error::{ResolveError, Result};
use crate::fingerprint::BrowserProfile;

/// HTTP client used by the resolver
#[derive(Debug, Clone)]
pub struct NewsClient {
    client: Client,
}

impl NewsClient {
    /// Create a client configured from `config`
    pub fn new(config: &NewsConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .use_rustls_tls()
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .redirect(reqwest::redirect::Policy::limited(10))
            .pool_idle_timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self { client })
    }

    /// Issue a GET, optionally dressed as a browser
    #[instrument(skip(self, profile), fields(url = %url))]
    pub async fn fetch(&self, url: &str, profile: Option<&BrowserProfile>) -> Result<Response> {
        let mut request = self.client.get(url);
        if let Some(profile) = profile {
            request = request.headers(profile.to_headers());
        }

        let response = request.send().await?;
        debug!(status = %response.status(), "Response received");
        Ok(response)
    }

    /// GET `url` and report only the status code. The body is not read.
    pub async fn probe(&self, url: &str) -> Result<StatusCode> {
        Ok(self.fetch(url, None).await?.status())
    }

    /// Fetch and return body as string. Non-success statuses are errors.
    pub async fn fetch_text(&self, url: &str, profile: Option<&BrowserProfile>) -> Result<String> {
        let response = ensure_success(url, self.fetch(url, profile).await?)?;
        Ok(response.text().await?)
    }

    /// Fetch and decode a JSON body. Non-success statuses are errors.
    pub async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        profile: Option<&BrowserProfile>,
    ) -> Result<T> {
        let body = self.fetch_text(url, profile).await?;
        serde_json::from_str(&body).map_err(|source| ResolveError::Json {
            url: url.to_string(),
            source,
        })
    }
}

fn ensure_success(url: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(ResolveError::Status {
            url: url.to_string(),
            status,
        })
    }
}
