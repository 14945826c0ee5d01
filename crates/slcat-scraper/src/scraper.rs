//! One-shot scrape: resolve the search configuration, then walk the catalog.

use slcat_core::{AppConfig, CatalogRecord};

use crate::client::Transport;
use crate::error::ScraperError;
use crate::resolve::ConfigResolver;
use crate::walker::CatalogWalker;

pub struct CatalogScraper<T> {
    transport: T,
    resolver: ConfigResolver,
    walker: CatalogWalker,
}

impl<T: Transport> CatalogScraper<T> {
    #[must_use]
    pub fn new(transport: T, resolver: ConfigResolver, walker: CatalogWalker) -> Self {
        Self {
            transport,
            resolver,
            walker,
        }
    }

    /// Wires the standard resolver chain and a walker from `config`.
    ///
    /// `site_id` and `collection` are caller overrides (e.g. CLI flags).
    #[must_use]
    pub fn from_app_config(
        transport: T,
        config: &AppConfig,
        site_id: Option<String>,
        collection: Option<String>,
    ) -> Self {
        Self::new(
            transport,
            ConfigResolver::from_app_config(config, site_id, collection),
            CatalogWalker::from_app_config(config),
        )
    }

    /// Resolves the search configuration once, then walks every page.
    ///
    /// # Errors
    ///
    /// Propagates [`ConfigResolver::resolve`] and [`CatalogWalker::walk`]
    /// errors; no records are returned on failure.
    pub async fn scrape(&self) -> Result<Vec<CatalogRecord>, ScraperError> {
        let config = self.resolver.resolve(&self.transport).await?;
        self.walker.walk(&self.transport, &config).await
    }

    #[cfg(test)]
    pub(crate) fn transport(&self) -> &T {
        &self.transport
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use slcat_core::{SearchEndpoint, DEFAULT_DOMAIN};

    use super::*;
    use crate::resolve::ResolutionStrategy;
    use crate::test_support::{search_params, FakeTransport};

    const LISTING: &str = "https://www.sportinglife.ca/fr-CA/liquidation/";
    const SC_TEST_API: &str = "https://sc-test.a.searchspring.io/api/search/search.json";
    const SC_DEMO_API: &str = "https://sc-demo.a.searchspring.io/api/search/search.json";

    fn scraper(
        transport: FakeTransport,
        explicit: Option<&str>,
        per_page: u32,
    ) -> CatalogScraper<FakeTransport> {
        let resolver = ConfigResolver::new(
            vec![
                ResolutionStrategy::Explicit(explicit.map(str::to_owned)),
                ResolutionStrategy::Environment(None),
                ResolutionStrategy::listing_page(LISTING),
            ],
            None,
        );
        let walker = CatalogWalker::new(SearchEndpoint::PerSite, per_page, 100);
        CatalogScraper::new(transport, resolver, walker)
    }

    #[tokio::test]
    async fn explicit_site_id_single_page() {
        let body = json!({
            "pagination": {"totalPages": 1},
            "results": [
                {"name": "Veste", "url": "/p/1", "price": "100", "sale_price": "50"},
                {"name": "Bottes", "url": "/p/2", "price": "80", "sale_price": "40"}
            ]
        });
        let transport = FakeTransport::new().respond(
            SC_DEMO_API,
            &search_params("sc-demo", DEFAULT_DOMAIN, "liquidation", 1, 48),
            200,
            body.to_string(),
        );
        let scraper = scraper(transport, Some("sc-demo"), 48);

        let records = scraper.scrape().await.unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Veste");
        assert_eq!(records[0].sale_price, Some(50.0));
        assert_eq!(records[1].name, "Bottes");
        let calls = scraper.transport().calls();
        assert_eq!(calls.len(), 1, "expected exactly one page fetch: {calls:?}");
        assert!(calls[0].starts_with(SC_DEMO_API));
    }

    #[tokio::test]
    async fn discovered_site_id_paginates_until_empty_page() {
        let html = r#"<script>var config = {"siteId":"sc-test","domain":"https://www.sportinglife.ca","collection":"liquidation"};</script>"#;
        let transport = FakeTransport::new()
            .respond(LISTING, &[], 200, html)
            .respond(
                SC_TEST_API,
                &search_params("sc-test", DEFAULT_DOMAIN, "liquidation", 1, 1),
                200,
                json!({"pagination": {"totalPages": 2}, "results": [{"name": "A", "url": "/p/1"}]})
                    .to_string(),
            )
            .respond(
                SC_TEST_API,
                &search_params("sc-test", DEFAULT_DOMAIN, "liquidation", 2, 1),
                200,
                json!({"results": []}).to_string(),
            );
        let scraper = scraper(transport, None, 1);

        let records = scraper.scrape().await.unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "A");
        let calls = scraper.transport().calls();
        assert_eq!(calls.len(), 3, "listing page + 2 search pages: {calls:?}");
        assert_eq!(calls[0], LISTING);
    }

    #[tokio::test]
    async fn unresolvable_site_id_fails_before_search() {
        let transport = FakeTransport::new().respond(
            LISTING,
            &[],
            200,
            "<html><body>Liquidation</body></html>",
        );
        let scraper = scraper(transport, None, 48);

        let err = scraper.scrape().await.unwrap_err();

        assert!(
            matches!(err, ScraperError::Configuration),
            "expected Configuration, got: {err:?}"
        );
        assert_eq!(scraper.transport().calls(), vec![LISTING.to_owned()]);
    }

    #[tokio::test]
    async fn server_error_discards_earlier_pages() {
        let transport = FakeTransport::new()
            .respond(
                SC_DEMO_API,
                &search_params("sc-demo", DEFAULT_DOMAIN, "liquidation", 1, 1),
                200,
                json!({"pagination": {"totalPages": 3}, "results": [{"name": "A"}]}).to_string(),
            )
            .respond(
                SC_DEMO_API,
                &search_params("sc-demo", DEFAULT_DOMAIN, "liquidation", 2, 1),
                500,
                "boom",
            );
        let scraper = scraper(transport, Some("sc-demo"), 1);

        let result = scraper.scrape().await;

        match result {
            Err(ScraperError::Fetch { page, status, .. }) => {
                assert_eq!(page, 2);
                assert_eq!(status, 500);
            }
            other => panic!("expected ScraperError::Fetch, got: {other:?}"),
        }
    }
}
