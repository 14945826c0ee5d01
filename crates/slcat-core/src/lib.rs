mod app_config;
mod config;
mod products;

pub use app_config::{AppConfig, SearchEndpoint};
pub use config::{load_app_config, load_app_config_from_env, normalize_listing_url};
pub use products::{CatalogRecord, ResolvedConfig, DEFAULT_COLLECTION, DEFAULT_DOMAIN};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
