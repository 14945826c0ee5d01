//! Page-by-page walk over the Searchspring search endpoint.

use slcat_core::{AppConfig, CatalogRecord, ResolvedConfig, SearchEndpoint};

use crate::client::Transport;
use crate::error::ScraperError;
use crate::normalize::normalize_item;
use crate::pagination::PageTracker;
use crate::types::SearchPage;

/// Page size used when the caller does not pick one.
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 48;

/// Upper bound on pages fetched in one walk. Guards against an endpoint
/// that never reports a total and never returns an empty page.
pub const DEFAULT_MAX_PAGES: u32 = 500;

/// Drives pagination against the search endpoint and normalizes every item.
#[derive(Debug, Clone)]
pub struct CatalogWalker {
    endpoint: SearchEndpoint,
    results_per_page: u32,
    max_pages: u32,
}

impl Default for CatalogWalker {
    fn default() -> Self {
        Self::new(
            SearchEndpoint::default(),
            DEFAULT_RESULTS_PER_PAGE,
            DEFAULT_MAX_PAGES,
        )
    }
}

impl CatalogWalker {
    #[must_use]
    pub fn new(endpoint: SearchEndpoint, results_per_page: u32, max_pages: u32) -> Self {
        Self {
            endpoint,
            results_per_page,
            max_pages,
        }
    }

    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self::new(
            config.search_endpoint.clone(),
            config.results_per_page,
            config.max_pages,
        )
    }

    /// Fetches pages 1, 2, … in order until the result set is exhausted and
    /// returns every normalized record in fetch order.
    ///
    /// **All-or-nothing semantics**: on any page failure, records from
    /// earlier pages are discarded and the error is returned.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Fetch`]: a page answered with status >= 400.
    /// - [`ScraperError::Deserialize`]: a page body is not a search response.
    /// - [`ScraperError::PaginationLimit`]: more than `max_pages` pages.
    /// - Transport errors are propagated unchanged.
    pub async fn walk<T: Transport>(
        &self,
        transport: &T,
        config: &ResolvedConfig,
    ) -> Result<Vec<CatalogRecord>, ScraperError> {
        let url = self.endpoint.url_for(config.site_id());
        let mut records: Vec<CatalogRecord> = Vec::new();
        let mut tracker = PageTracker::new();
        let mut page: u32 = 1;

        loop {
            if page > self.max_pages {
                return Err(ScraperError::PaginationLimit {
                    max_pages: self.max_pages,
                });
            }

            let params = page_params(config, page, self.results_per_page);
            let response = transport.get(&url, &params).await?;
            if response.is_error() {
                return Err(ScraperError::Fetch {
                    page,
                    status: response.status,
                    url: response.final_url,
                });
            }

            let parsed: SearchPage =
                serde_json::from_str(&response.body).map_err(|e| ScraperError::Deserialize {
                    context: format!("search page {page}"),
                    source: e,
                })?;

            let reported_total = parsed.total_pages();
            let results_empty = parsed.results.is_empty();
            let item_count = parsed.results.len();

            records.extend(
                parsed
                    .results
                    .into_iter()
                    .map(|item| normalize_item(item, config.domain())),
            );

            let done = tracker.observe(page, reported_total, results_empty);
            tracing::debug!(
                page,
                items = item_count,
                total_pages = ?tracker.total_pages(),
                done,
                "fetched search page"
            );
            if done {
                break;
            }
            page += 1;
        }

        tracing::info!(
            pages = page,
            records = records.len(),
            site_id = %config.site_id(),
            "catalog walk complete"
        );
        Ok(records)
    }
}

/// Query parameters for one search page.
pub(crate) fn page_params(
    config: &ResolvedConfig,
    page: u32,
    results_per_page: u32,
) -> Vec<(&'static str, String)> {
    vec![
        ("siteId", config.site_id().to_owned()),
        ("page", page.to_string()),
        ("resultsPerPage", results_per_page.to_string()),
        ("resultsFormat", "native".to_owned()),
        ("domain", config.domain().to_owned()),
        ("bgfilter.collection", config.collection().to_owned()),
    ]
}
