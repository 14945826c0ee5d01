//! Best-effort extraction of Searchspring settings from listing-page HTML.
//!
//! The storefront embeds its search configuration as a JSON-ish object in an
//! inline script, e.g. `{"siteId":"sc-test","domain":"https://…"}`.

use std::sync::LazyLock;

use regex::Regex;

static SITE_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"siteId"\s*:\s*"([^"]+)""#).expect("valid regex"));
static DOMAIN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"domain"\s*:\s*"([^"]+)""#).expect("valid regex"));
static COLLECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"collection"\s*:\s*"([^"]+)""#).expect("valid regex"));

/// Whatever could be found on the page. Every field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredFields {
    pub site_id: Option<String>,
    pub domain: Option<String>,
    pub collection: Option<String>,
}

/// Pulls [`DiscoveredFields`] out of semi-structured page text.
///
/// Absence of a field is not an error.
pub trait FieldExtractor: Send + Sync {
    fn extract(&self, html: &str) -> DiscoveredFields;
}

/// Three independent regex searches; the first match per key wins.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexFieldExtractor;

impl FieldExtractor for RegexFieldExtractor {
    fn extract(&self, html: &str) -> DiscoveredFields {
        DiscoveredFields {
            site_id: first_capture(&SITE_ID_RE, html),
            domain: first_capture(&DOMAIN_RE, html),
            collection: first_capture(&COLLECTION_RE, html),
        }
    }
}

fn first_capture(re: &Regex, text: &str) -> Option<String> {
    re.captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
}
