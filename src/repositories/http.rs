//! Outbound HTTP - thin wrapper over reqwest.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use tracing::debug;

use crate::error::{ReservationError, Result};

const USER_AGENT_VALUE: &str = concat!("cafe-reservation/", env!("CARGO_PKG_VERSION"));

/// Sends one JSON body to a URL and reports the response status.
#[async_trait]
pub trait Transport: Send + Sync {
    /// # Errors
    ///
    /// Returns error only when the request could not be sent at all
    async fn post_json(&self, url: &str, body: String) -> Result<u16>;
}

#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// # Errors
    ///
    /// Returns error if the underlying client cannot be built
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers)
            .build()
            .map_err(|e| ReservationError::ClientBuild(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<u16> {
        let url = reqwest::Url::parse(url)
            .map_err(|e| ReservationError::InvalidEndpoint(format!("{}: {}", url, e)))?;
        debug!(url = %url, bytes = body.len(), "posting reservation");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        Ok(response.status().as_u16())
    }
}
