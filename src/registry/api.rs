//! Registry entity API contract
//!
//! The [`EntityApi`] trait is the seam between the publish protocol and the
//! HTTP transport; the production implementation lives in
//! [`client`](super::client), tests substitute a mock.

use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;

/// Submission mode for an entity write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Plain create; rejected by the registry when the entity or path exists
    Create,
    /// Create-or-update fallback used after a recognized conflict
    Upsert,
}

/// Version-control placement metadata accompanying the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitDetails {
    pub branch_name: String,
    pub file_path: String,
    pub commit_message: String,
    pub connector_ref: String,
    pub store_type: String,
    pub repo_name: String,
    pub is_harness_code_repo: bool,
}

impl GitDetails {
    /// Placement in a remote repository managed through a connector
    pub fn remote(
        branch_name: impl Into<String>,
        file_path: impl Into<String>,
        commit_message: impl Into<String>,
        connector_ref: impl Into<String>,
        repo_name: impl Into<String>,
    ) -> Self {
        Self {
            branch_name: branch_name.into(),
            file_path: file_path.into(),
            commit_message: commit_message.into(),
            connector_ref: connector_ref.into(),
            store_type: "REMOTE".to_string(),
            repo_name: repo_name.into(),
            is_harness_code_repo: false,
        }
    }
}

/// Request body of an entity submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityPayload {
    pub yaml: String,
    pub git_details: GitDetails,
}

/// Status and body of a registry response, regardless of outcome
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Entity submission endpoint of the registry.
///
/// Implementations return `Err` only for transport-level failures; any HTTP
/// response, success or not, is an `Ok(ApiResponse)` so the publish protocol
/// can inspect status and body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EntityApi: Send + Sync {
    async fn submit(&self, mode: OperationMode, payload: &EntityPayload) -> Result<ApiResponse>;
}
