//! HTTP transport used by the resolver and the catalog walker.
//!
//! The core only needs "GET with query parameters, hand back status and
//! body". [`Transport`] captures that contract so tests can script responses;
//! [`ReqwestTransport`] is the real implementation.

mod url;

use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

pub use url::{resolve_item_url, with_query};

/// Raw outcome of a GET request. Non-2xx statuses are *not* errors at this
/// layer; callers decide what a status means for their endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
    /// Effective URL after query encoding and redirects.
    pub final_url: String,
}

impl HttpResponse {
    /// `true` for any 4xx or 5xx status.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.status >= 400
    }
}

/// A generic "GET with query parameters" capability.
///
/// Parameters are appended to `url` as a standard query string, in order.
/// Connection-level failures are returned as [`ScraperError::Http`].
pub trait Transport {
    fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> impl Future<Output = Result<HttpResponse, ScraperError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client` with a fixed timeout and
/// `User-Agent`. No retries: a failed request is returned as-is.
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Creates a transport with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HttpResponse, ScraperError> {
        let request_url = with_query(url, params)?;
        tracing::debug!(url = %request_url, "GET");

        let response = self
            .client
            .get(request_url)
            .header(
                reqwest::header::ACCEPT,
                "application/json,text/html;q=0.9,*/*;q=0.8",
            )
            .header(reqwest::header::ACCEPT_LANGUAGE, "fr-CA,fr;q=0.9,en;q=0.8")
            .send()
            .await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        let body = response.text().await?;

        Ok(HttpResponse {
            status,
            body,
            final_url,
        })
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
