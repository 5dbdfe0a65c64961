//! Configuration loading logic
//!
//! Loads configuration from the config file and environment, layered
//! according to precedence rules. All environment access happens here, once,
//! at startup; the resulting [`Config`] is passed explicitly into every
//! component.

use anyhow::{Context, Result};
use std::path::PathBuf;

use super::paths;
use super::schema::Config;
use super::ConfigError;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        let root_path = paths::root_config_path();
        if root_path.exists() {
            config = Self::load_file(&root_path)?;
        }

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(url) = std::env::var("CATSYNC_REGISTRY_URL") {
            config.registry.base_url = url;
        }
        if let Ok(account) = std::env::var("CATSYNC_ACCOUNT_ID") {
            config.registry.account_id = account;
        }
        if let Ok(key) = std::env::var("CATSYNC_API_KEY") {
            config.registry.api_key = key;
        }
        if let Ok(org) = std::env::var("CATSYNC_ORG") {
            config.registry.org_identifier = org;
        }
        if let Ok(project) = std::env::var("CATSYNC_PROJECT") {
            config.registry.project_identifier = project;
        }
        if let Ok(connector) = std::env::var("CATSYNC_CONNECTOR_REF") {
            config.git.connector_ref = connector;
        }
        if let Ok(repo) = std::env::var("CATSYNC_REPO") {
            config.git.repo_name = repo;
        }
        if let Ok(branch) = std::env::var("CATSYNC_BRANCH") {
            config.git.branch = branch;
        }
        if let Some(github) = config.github.as_mut() {
            if let Ok(token) = std::env::var("GITHUB_TOKEN") {
                github.token = token;
            }
        }

        config
    }

    /// Check that everything a sync run needs is present.
    ///
    /// Run before any network call so a half-configured environment fails
    /// with a field name instead of a registry 401.
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        let required = [
            (
                config.registry.account_id.is_empty(),
                "registry.accountId",
                "CATSYNC_ACCOUNT_ID",
            ),
            (
                config.registry.api_key.is_empty(),
                "registry apiKey",
                "CATSYNC_API_KEY",
            ),
            (
                config.registry.org_identifier.is_empty(),
                "registry.orgIdentifier",
                "CATSYNC_ORG",
            ),
            (
                config.registry.project_identifier.is_empty(),
                "registry.projectIdentifier",
                "CATSYNC_PROJECT",
            ),
            (
                config.git.connector_ref.is_empty(),
                "git.connectorRef",
                "CATSYNC_CONNECTOR_REF",
            ),
            (
                config.git.repo_name.is_empty(),
                "git.repoName",
                "CATSYNC_REPO",
            ),
        ];

        for (missing, field, env_var) in required {
            if missing {
                return Err(ConfigError::MissingField { field, env_var });
            }
        }

        if let Some(github) = &config.github {
            if github.token.is_empty() {
                return Err(ConfigError::MissingField {
                    field: "github token",
                    env_var: "GITHUB_TOKEN",
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_config() -> Config {
        let mut config = Config::default();
        config.registry.account_id = "acct".to_string();
        config.registry.api_key = "key".to_string();
        config.registry.org_identifier = "default".to_string();
        config.registry.project_identifier = "platform".to_string();
        config.git.connector_ref = "github_connector".to_string();
        config.git.repo_name = "catalog".to_string();
        config
    }

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.registry.base_url, "https://app.harness.io");
        assert_eq!(config.git.branch, "main");
        assert_eq!(config.catalog.lifecycle, "production");
        assert!(config.github.is_none());
    }

    #[test]
    fn test_env_overrides() {
        // SAFETY: set_var is unsafe in Rust 2024 due to potential data races.
        // Safe in tests: each test sets its own variables and cleans up.
        unsafe {
            std::env::set_var("CATSYNC_ORG", "acme");
            std::env::set_var("CATSYNC_BRANCH", "catalog-main");
        }

        let config = ConfigLoader::apply_env_overrides(Config::default());
        assert_eq!(config.registry.org_identifier, "acme");
        assert_eq!(config.git.branch, "catalog-main");

        // Cleanup
        unsafe {
            std::env::remove_var("CATSYNC_ORG");
            std::env::remove_var("CATSYNC_BRANCH");
        }
    }

    #[test]
    fn test_validate_accepts_complete_config() {
        assert!(ConfigLoader::validate(&filled_config()).is_ok());
    }

    #[test]
    fn test_validate_reports_missing_field() {
        let mut config = filled_config();
        config.registry.api_key.clear();

        let err = ConfigLoader::validate(&config).unwrap_err();
        assert!(err.to_string().contains("CATSYNC_API_KEY"));
    }

    #[test]
    fn test_file_parse() {
        let yaml = r#"
registry:
  accountId: acct
  orgIdentifier: acme
  projectIdentifier: platform
git:
  connectorRef: github_connector
  repoName: catalog
  branch: release
catalog:
  lifecycle: experimental
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.registry.account_id, "acct");
        assert_eq!(config.git.branch, "release");
        assert_eq!(config.catalog.lifecycle, "experimental");
        // Defaults still fill unspecified fields
        assert_eq!(config.registry.base_url, "https://app.harness.io");
    }
}
