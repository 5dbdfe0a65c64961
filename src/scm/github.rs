//! GitHub contents-API mirror writer
//!
//! Writes rendered catalog documents straight into a GitHub repository,
//! independent of the registry's own version-control handling. Create and
//! update share one path: an existing file's SHA is looked up first and
//! attached to the PUT when present.

use anyhow::{Context, Result};
use base64::Engine;
use serde::Serialize;
use std::time::Duration;

use crate::config::schema::GithubConfig;

/// Outcome of one mirror write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScmWriteResult {
    Created,
    Updated,
}

#[derive(Serialize)]
struct ContentsPayload {
    message: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    sha: Option<String>,
}

/// Writer for the GitHub repository contents API
pub struct GithubWriter {
    http: reqwest::Client,
    token: String,
    org: String,
    repo: String,
}

impl GithubWriter {
    pub fn new(config: &GithubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("catsync")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http,
            token: config.token.clone(),
            org: config.org.clone(),
            repo: config.repo.clone(),
        })
    }

    fn contents_url(&self, file_path: &str) -> String {
        format!(
            "https://api.github.com/repos/{}/{}/contents/{}",
            self.org, self.repo, file_path
        )
    }

    /// SHA of the file at `file_path`, or `None` when it does not exist.
    ///
    /// Lookup failures are treated as "absent": the subsequent PUT will then
    /// surface any real problem.
    async fn existing_sha(&self, url: &str) -> Option<String> {
        let resp = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .ok()?;

        if !resp.status().is_success() {
            return None;
        }

        let body: serde_json::Value = resp.json().await.ok()?;
        body.get("sha").and_then(|s| s.as_str()).map(String::from)
    }

    /// Create or update `file_path` with `content`.
    pub async fn put_file(
        &self,
        file_path: &str,
        content: &str,
        commit_message: &str,
    ) -> Result<ScmWriteResult> {
        let url = self.contents_url(file_path);
        let sha = self.existing_sha(&url).await;
        let updating = sha.is_some();

        let payload = ContentsPayload {
            message: commit_message.to_string(),
            content: base64::engine::general_purpose::STANDARD.encode(content),
            sha,
        };

        let resp = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .header("Accept", "application/vnd.github+json")
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("Failed to reach GitHub for {}", file_path))?;

        let status = resp.status();
        if status.is_success() {
            Ok(if updating {
                ScmWriteResult::Updated
            } else {
                ScmWriteResult::Created
            })
        } else {
            let body = resp.text().await.unwrap_or_default();
            let truncated: String = body.chars().take(200).collect();
            anyhow::bail!(
                "GitHub rejected write to {} (status {}): {}",
                file_path,
                status,
                truncated
            )
        }
    }
}
