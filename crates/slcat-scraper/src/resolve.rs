//! Resolution of the search API parameters (site id, domain, collection).
//!
//! Sources are tried in order and the first one that yields a site
//! identifier wins:
//!
//! 1. an identifier passed explicitly by the caller,
//! 2. an identifier taken from the environment,
//! 3. a scan of the storefront listing page.
//!
//! Only the last source touches the network.

use slcat_core::{AppConfig, ResolvedConfig, DEFAULT_COLLECTION, DEFAULT_DOMAIN};

use crate::client::Transport;
use crate::error::ScraperError;
use crate::extract::{FieldExtractor, RegexFieldExtractor};

/// What a single source knows. Missing `domain`/`collection` are filled
/// with defaults by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialConfig {
    pub site_id: String,
    pub domain: Option<String>,
    pub collection: Option<String>,
}

/// One source of truth for the site identifier.
pub enum ResolutionStrategy {
    /// Identifier supplied by the caller (e.g. `--site-id`).
    Explicit(Option<String>),
    /// Identifier read from the process environment at startup.
    Environment(Option<String>),
    /// Fetch `url` and let `extractor` look for the settings in its body.
    ListingPage {
        url: String,
        extractor: Box<dyn FieldExtractor>,
    },
}

impl ResolutionStrategy {
    /// Listing-page scan with the default regex extractor.
    #[must_use]
    pub fn listing_page(url: impl Into<String>) -> Self {
        ResolutionStrategy::ListingPage {
            url: url.into(),
            extractor: Box::new(RegexFieldExtractor),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ResolutionStrategy::Explicit(_) => "explicit",
            ResolutionStrategy::Environment(_) => "environment",
            ResolutionStrategy::ListingPage { .. } => "listing page",
        }
    }

    /// Returns `Ok(None)` when this source has no site identifier.
    ///
    /// # Errors
    ///
    /// Propagates transport failures from the listing-page fetch.
    pub async fn attempt<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<Option<PartialConfig>, ScraperError> {
        match self {
            ResolutionStrategy::Explicit(site_id) | ResolutionStrategy::Environment(site_id) => {
                Ok(non_blank(site_id.as_deref()).map(|site_id| PartialConfig {
                    site_id,
                    ..PartialConfig::default()
                }))
            }
            ResolutionStrategy::ListingPage { url, extractor } => {
                let response = transport.get(url, &[]).await?;
                if response.is_error() {
                    tracing::warn!(
                        url = %url,
                        status = response.status,
                        "listing page returned an error status; scanning body anyway"
                    );
                }

                let fields = extractor.extract(&response.body);
                Ok(non_blank(fields.site_id.as_deref()).map(|site_id| PartialConfig {
                    site_id,
                    domain: fields.domain,
                    collection: fields.collection,
                }))
            }
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Ordered chain of [`ResolutionStrategy`] values plus the caller's
/// collection override.
pub struct ConfigResolver {
    strategies: Vec<ResolutionStrategy>,
    collection: Option<String>,
}

impl ConfigResolver {
    #[must_use]
    pub fn new(strategies: Vec<ResolutionStrategy>, collection: Option<String>) -> Self {
        Self {
            strategies,
            collection,
        }
    }

    /// The standard explicit → environment → listing page chain.
    #[must_use]
    pub fn from_app_config(
        config: &AppConfig,
        explicit_site_id: Option<String>,
        collection: Option<String>,
    ) -> Self {
        Self::new(
            vec![
                ResolutionStrategy::Explicit(explicit_site_id),
                ResolutionStrategy::Environment(config.site_id.clone()),
                ResolutionStrategy::listing_page(config.listing_url.clone()),
            ],
            collection,
        )
    }

    /// Walks the chain and builds the [`ResolvedConfig`] from the first
    /// source that knows the site identifier.
    ///
    /// The caller's collection beats a discovered one; both fall back to
    /// [`DEFAULT_COLLECTION`]. The domain falls back to [`DEFAULT_DOMAIN`].
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Configuration`]: no source yielded a site identifier.
    /// - Transport errors from the listing-page fetch are propagated.
    pub async fn resolve<T: Transport>(
        &self,
        transport: &T,
    ) -> Result<ResolvedConfig, ScraperError> {
        for strategy in &self.strategies {
            let Some(partial) = strategy.attempt(transport).await? else {
                tracing::debug!(source = strategy.label(), "no site identifier from source");
                continue;
            };

            let domain = partial.domain.unwrap_or_else(|| DEFAULT_DOMAIN.to_string());
            let collection = self
                .collection
                .clone()
                .filter(|c| !c.trim().is_empty())
                .or(partial.collection)
                .unwrap_or_else(|| DEFAULT_COLLECTION.to_string());

            tracing::info!(
                source = strategy.label(),
                site_id = %partial.site_id,
                domain = %domain,
                collection = %collection,
                "resolved search configuration"
            );
            return Ok(ResolvedConfig::new(partial.site_id, domain, collection));
        }

        Err(ScraperError::Configuration)
    }
}
