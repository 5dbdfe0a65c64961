//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and provides
//! a configured client for use throughout the application.

pub mod discovery;

pub use discovery::ClusterLister;

use anyhow::Result;
use kube::{Client, Config};

/// Initialize and return a Kubernetes client
///
/// Uses the default kubeconfig loading strategy:
/// 1. In-cluster config (if running in a pod)
/// 2. KUBECONFIG environment variable
/// 3. ~/.kube/config
pub async fn create_client() -> Result<Client> {
    let config = Config::infer().await?;
    let client = Client::try_from(config)?;
    Ok(client)
}
