//! Fetching load requests over the network

use std::time::Duration;

use async_trait::async_trait;

use super::{LoadRequest, Page};
use crate::utils::{NetworkError, Result};

/// User agent sent with every load
pub const USER_AGENT: &str = concat!("webnav/", env!("CARGO_PKG_VERSION"));

/// Performs the network side of a load
#[async_trait]
pub trait Fetcher {
    async fn fetch(&self, request: &LoadRequest) -> std::result::Result<Page, NetworkError>;
}

/// reqwest-backed fetcher
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Create a fetcher with the default 30 second timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(30))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = client_builder(timeout).build()?;
        Ok(Self { client })
    }
}

/// TLS goes through rustls so handshake failures can be recognised
fn client_builder(timeout: Duration) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .use_rustls_tls()
        .user_agent(USER_AGENT)
        .timeout(timeout)
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, request: &LoadRequest) -> std::result::Result<Page, NetworkError> {
        log::debug!("{} {}", request.method().as_str(), request.url());

        let response = self
            .client
            .get(request.url().clone())
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| NetworkError::from_reqwest(&e))?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| NetworkError::from_reqwest(&e))?;

        Ok(Page::from_html(url, status.as_u16(), &body))
    }
}
