use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Storefront origin used when neither the caller nor the listing page
/// supplies a domain.
pub const DEFAULT_DOMAIN: &str = "https://www.sportinglife.ca";

/// Collection filter used when neither the caller nor the listing page
/// supplies one.
pub const DEFAULT_COLLECTION: &str = "liquidation";

/// The three parameters needed to address the search API for one run.
///
/// Built once by the resolver and only handed out by reference afterwards;
/// fields are private so nothing downstream can rewrite them mid-walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    site_id: String,
    domain: String,
    collection: String,
}

impl ResolvedConfig {
    #[must_use]
    pub fn new(
        site_id: impl Into<String>,
        domain: impl Into<String>,
        collection: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            domain: domain.into(),
            collection: collection.into(),
        }
    }

    /// Opaque merchant token, e.g. `"sc-demo"`.
    #[must_use]
    pub fn site_id(&self) -> &str {
        &self.site_id
    }

    /// Absolute storefront origin that relative item URLs resolve against.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Collection filter sent as `bgfilter.collection`.
    #[must_use]
    pub fn collection(&self) -> &str {
        &self.collection
    }
}

/// A catalog item normalized from a raw search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub name: String,
    /// Absolute product URL, resolved against the storefront domain.
    pub url: String,
    /// Regular price; `None` when missing or not numeric.
    pub price: Option<f64>,
    /// Discounted price; `None` when missing or not numeric.
    pub sale_price: Option<f64>,
    /// Thumbnail URL as returned by the API.
    pub image: Option<String>,
    /// The untouched source payload.
    pub raw: Map<String, Value>,
}

impl CatalogRecord {
    /// Returns `true` when both prices are known and the sale price is lower.
    #[must_use]
    pub fn is_discounted(&self) -> bool {
        matches!((self.price, self.sale_price), (Some(p), Some(s)) if s < p)
    }
}
