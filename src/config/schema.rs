//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for
//! serialization. Components receive these structs explicitly; nothing below
//! the loader reads process environment directly.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Registry endpoint and identity
    #[serde(default)]
    pub registry: RegistryConfig,

    /// Version-control placement for registry writes
    #[serde(default)]
    pub git: GitConfig,

    /// Catalog document defaults
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Optional direct GitHub mirror target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<GithubConfig>,
}

/// Registry endpoint and identity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegistryConfig {
    /// Registry base URL
    #[serde(default = "default_registry_url")]
    pub base_url: String,

    /// Account identifier sent in the Harness-Account header
    #[serde(default)]
    pub account_id: String,

    /// API key; loaded from the environment, never written back to disk
    #[serde(default, skip_serializing)]
    pub api_key: String,

    #[serde(default)]
    pub org_identifier: String,

    #[serde(default)]
    pub project_identifier: String,

    /// HTTP timeout for entity submissions
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: default_registry_url(),
            account_id: String::new(),
            api_key: String::new(),
            org_identifier: String::new(),
            project_identifier: String::new(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Version-control placement for registry writes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GitConfig {
    /// Target branch in the catalog repository
    #[serde(default = "default_branch")]
    pub branch: String,

    /// Registry-side connector reference used for the write
    #[serde(default)]
    pub connector_ref: String,

    /// Catalog repository name
    #[serde(default)]
    pub repo_name: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            branch: default_branch(),
            connector_ref: String::new(),
            repo_name: String::new(),
        }
    }
}

/// Catalog document defaults
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Owner reference stamped on every document
    #[serde(default = "default_owner")]
    pub owner: String,

    /// Lifecycle stamped on every document
    #[serde(default = "default_lifecycle")]
    pub lifecycle: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            lifecycle: default_lifecycle(),
        }
    }
}

/// Direct GitHub mirror target for rendered documents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GithubConfig {
    /// GitHub organization or user owning the mirror repository
    pub org: String,

    /// Mirror repository name
    pub repo: String,

    /// Access token; loaded from the environment, never written back to disk
    #[serde(default, skip_serializing)]
    pub token: String,
}

// Default value functions
fn default_registry_url() -> String {
    "https://app.harness.io".to_string()
}

fn default_timeout_seconds() -> u64 {
    30
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_owner() -> String {
    "group:account/platform_team".to_string()
}

fn default_lifecycle() -> String {
    "production".to_string()
}
