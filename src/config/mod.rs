//! Configuration system for catsync
//!
//! Registry credentials, version-control placement, and catalog defaults are
//! read once at startup into an explicit [`Config`] passed into each
//! component; no component reads ambient process state directly.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{CatalogConfig, Config, GitConfig, GithubConfig, RegistryConfig};

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required configuration: {field} (set {env_var} or add it to config.yaml)")]
    MissingField {
        field: &'static str,
        env_var: &'static str,
    },
}
