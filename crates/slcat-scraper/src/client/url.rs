//! URL helpers: query-string encoding for requests and resolution of item
//! URLs against the storefront domain.

use reqwest::Url;

use crate::error::ScraperError;

/// Appends `params` to `url` as an encoded query string, preserving order
/// and any query already present on `url`.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidUrl`] if `url` is not an absolute URL.
pub fn with_query(url: &str, params: &[(&str, String)]) -> Result<Url, ScraperError> {
    let mut parsed = Url::parse(url).map_err(|e| ScraperError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;

    if !params.is_empty() {
        let mut pairs = parsed.query_pairs_mut();
        for (key, value) in params {
            pairs.append_pair(key, value);
        }
    }

    Ok(parsed)
}

/// Resolves an item URL against the storefront `domain`.
///
/// Relative paths (`/p/123`) become absolute; absolute URLs come back
/// unchanged. Never fails: if `domain` cannot serve as a base, the raw value
/// is returned and a warning is logged.
#[must_use]
pub fn resolve_item_url(domain: &str, raw: &str) -> String {
    // Absolute values are returned byte-for-byte, not re-serialized.
    if Url::parse(raw).is_ok() {
        return raw.to_owned();
    }

    let base = match Url::parse(domain) {
        Ok(base) => base,
        Err(e) => {
            tracing::warn!(
                domain,
                error = %e,
                "storefront domain is not an absolute URL; keeping item URL as-is"
            );
            return raw.to_owned();
        }
    };

    base.join(raw).map_or_else(
        |e| {
            tracing::warn!(domain, raw, error = %e, "could not resolve item URL");
            raw.to_owned()
        },
        String::from,
    )
}
