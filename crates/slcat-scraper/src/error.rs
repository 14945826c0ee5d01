use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("cannot determine API site identifier (siteId)")]
    Configuration,

    #[error("HTTP {status} while loading page {page} from {url}")]
    Fetch { page: u32, status: u16, url: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid URL \"{url}\": {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("pagination limit reached: exceeded {max_pages} pages")]
    PaginationLimit { max_pages: u32 },
}
