use crate::app_config::{AppConfig, SearchEndpoint};
use crate::ConfigError;

pub(crate) const DEFAULT_LISTING_URL: &str = "https://www.sportinglife.ca/fr-CA/liquidation/";

pub(crate) const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so tests can feed a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    // Blank counts as unset.
    let site_id = lookup("SPORTING_LIFE_SITE_ID")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let listing_url = normalize_listing_url(&or_default(
        "SPORTING_LIFE_LISTING_URL",
        DEFAULT_LISTING_URL,
    ));

    let search_endpoint = or_default("SLCAT_SEARCH_ENDPOINT", "per-site")
        .parse::<SearchEndpoint>()
        .map_err(|reason| ConfigError::InvalidEnvVar {
            var: "SLCAT_SEARCH_ENDPOINT".to_string(),
            reason,
        })?;

    let parse_positive_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        match parse_u32(var, default)? {
            0 => Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: "must be at least 1".to_string(),
            }),
            n => Ok(n),
        }
    };

    let results_per_page = parse_positive_u32("SLCAT_RESULTS_PER_PAGE", "48")?;
    let max_pages = parse_positive_u32("SLCAT_MAX_PAGES", "500")?;
    let request_timeout_secs = parse_u64("SLCAT_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("SLCAT_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("SLCAT_LOG_LEVEL", "info");

    Ok(AppConfig {
        site_id,
        listing_url,
        search_endpoint,
        results_per_page,
        max_pages,
        request_timeout_secs,
        user_agent,
        log_level,
    })
}

/// Strips trailing slashes and appends exactly one.
#[must_use]
pub fn normalize_listing_url(url: &str) -> String {
    format!("{}/", url.trim().trim_end_matches('/'))
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
