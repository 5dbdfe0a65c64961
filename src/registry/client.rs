//! HTTP client for the registry entity API

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use url::Url;

use super::api::{ApiResponse, EntityApi, EntityPayload, OperationMode};
use crate::config::schema::RegistryConfig;

/// Registry entity API client backed by reqwest
pub struct RegistryClient {
    http: reqwest::Client,
    base_url: String,
    account_id: String,
    api_key: String,
    org_identifier: String,
    project_identifier: String,
}

impl RegistryClient {
    pub fn new(config: &RegistryConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        tracing::debug!("Created registry client for: {}", config.base_url);

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            account_id: config.account_id.clone(),
            api_key: config.api_key.clone(),
            org_identifier: config.org_identifier.clone(),
            project_identifier: config.project_identifier.clone(),
        })
    }

    /// Entity endpoint URL for the given submission mode
    fn entities_url(&self, mode: OperationMode) -> Result<Url> {
        let mut url = Url::parse(&format!(
            "{}/v1/entities",
            self.base_url.trim_end_matches('/')
        ))
        .with_context(|| format!("Invalid registry URL: {}", self.base_url))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair("convert", "false");
            query.append_pair("dry_run", "false");
            if mode == OperationMode::Upsert {
                query.append_pair("operationMode", "UPSERT");
            }
            query.append_pair("orgIdentifier", &self.org_identifier);
            query.append_pair("projectIdentifier", &self.project_identifier);
        }

        Ok(url)
    }
}

#[async_trait]
impl EntityApi for RegistryClient {
    async fn submit(&self, mode: OperationMode, payload: &EntityPayload) -> Result<ApiResponse> {
        let url = self.entities_url(mode)?;

        tracing::debug!(mode = ?mode, "Submitting entity to {}", url);

        let resp = self
            .http
            .post(url)
            .header("Harness-Account", &self.account_id)
            .header("x-api-key", &self.api_key)
            .json(payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach registry: {}", self.base_url))?;

        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();

        tracing::debug!("Registry responded with status {}", status);

        Ok(ApiResponse { status, body })
    }
}
