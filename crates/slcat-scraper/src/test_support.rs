//! Scripted in-memory [`Transport`] for unit tests.

use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::client::{HttpResponse, Transport};
use crate::error::ScraperError;

/// Serves queued responses keyed by URL plus sorted query parameters and
/// records every request it sees. An unscripted request panics.
#[derive(Default)]
pub(crate) struct FakeTransport {
    responses: Mutex<HashMap<String, VecDeque<HttpResponse>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeTransport {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queues a response for `url` + `params`.
    pub(crate) fn respond(
        self,
        url: &str,
        params: &[(&str, String)],
        status: u16,
        body: impl Into<String>,
    ) -> Self {
        let key = request_key(url, params);
        self.responses
            .lock()
            .unwrap()
            .entry(key)
            .or_default()
            .push_back(HttpResponse {
                status,
                body: body.into(),
                final_url: url.to_owned(),
            });
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Transport for FakeTransport {
    async fn get(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<HttpResponse, ScraperError> {
        let key = request_key(url, params);
        self.calls.lock().unwrap().push(key.clone());
        let next = self
            .responses
            .lock()
            .unwrap()
            .get_mut(&key)
            .and_then(VecDeque::pop_front);
        match next {
            Some(response) => Ok(response),
            None => panic!("unexpected request for {key}"),
        }
    }
}

/// `url?k1=v1&k2=v2` with keys sorted, or just `url` without params.
pub(crate) fn request_key(url: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return url.to_owned();
    }
    let mut pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    format!("{url}?{}", pairs.join("&"))
}

/// Query parameters the walker sends for one search page.
pub(crate) fn search_params(
    site_id: &str,
    domain: &str,
    collection: &str,
    page: u32,
    per_page: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("siteId", site_id.to_owned()),
        ("page", page.to_string()),
        ("resultsPerPage", per_page.to_string()),
        ("resultsFormat", "native".to_owned()),
        ("domain", domain.to_owned()),
        ("bgfilter.collection", collection.to_owned()),
    ]
}
