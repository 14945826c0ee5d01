use std::str::FromStr;

/// Fixed Searchspring endpoint shared by every merchant.
const GLOBAL_SEARCH_URL: &str = "https://api.searchspring.net/api/search/search.json";

/// How the search API base URL is constructed for a given site identifier.
///
/// The site identifier is always sent as the `siteId` query parameter; this
/// only controls which host receives the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SearchEndpoint {
    /// `https://{site_id}.a.searchspring.io/api/search/search.json`
    #[default]
    PerSite,
    /// `https://api.searchspring.net/api/search/search.json`
    Global,
    /// An explicit absolute URL, used as-is.
    Custom(String),
}

impl SearchEndpoint {
    /// Returns the search URL to query for `site_id`.
    #[must_use]
    pub fn url_for(&self, site_id: &str) -> String {
        match self {
            SearchEndpoint::PerSite => {
                format!("https://{site_id}.a.searchspring.io/api/search/search.json")
            }
            SearchEndpoint::Global => GLOBAL_SEARCH_URL.to_string(),
            SearchEndpoint::Custom(url) => url.clone(),
        }
    }
}

impl std::fmt::Display for SearchEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchEndpoint::PerSite => write!(f, "per-site"),
            SearchEndpoint::Global => write!(f, "global"),
            SearchEndpoint::Custom(url) => write!(f, "{url}"),
        }
    }
}

impl FromStr for SearchEndpoint {
    type Err = String;

    /// Accepts `per-site`, `global`, or an absolute `http(s)://` URL.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "per-site" => Ok(SearchEndpoint::PerSite),
            "global" => Ok(SearchEndpoint::Global),
            _ if s.starts_with("https://") || s.starts_with("http://") => {
                Ok(SearchEndpoint::Custom(s.to_string()))
            }
            _ => Err(format!(
                "expected \"per-site\", \"global\" or an absolute URL, got \"{s}\""
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Site identifier taken from the environment, if any.
    pub site_id: Option<String>,
    /// Listing page scanned for `siteId`/`domain`/`collection` when no
    /// identifier is supplied. Always ends with a single `/`.
    pub listing_url: String,
    pub search_endpoint: SearchEndpoint,
    pub results_per_page: u32,
    pub max_pages: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
}
