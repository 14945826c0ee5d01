pub mod client;
pub mod error;
pub mod extract;
pub mod normalize;
pub mod pagination;
pub mod resolve;
pub mod scraper;
pub mod types;
pub mod walker;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{HttpResponse, ReqwestTransport, Transport};
pub use error::ScraperError;
pub use extract::{DiscoveredFields, FieldExtractor, RegexFieldExtractor};
pub use normalize::{coerce_price, normalize_item};
pub use resolve::{ConfigResolver, PartialConfig, ResolutionStrategy};
pub use scraper::CatalogScraper;
pub use walker::CatalogWalker;
