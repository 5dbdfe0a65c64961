//! Cluster resource discovery
//!
//! Lists the workload resources a sync run operates on, namespaced or across
//! all namespaces. A failure fetching one kind is logged and that kind
//! skipped; discovery itself never aborts the run.

use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Pod, Service};
use kube::api::ListParams;
use kube::Api;
use serde_json::Value;

use crate::model::ResourceKind;

/// Lists raw workload resources from the cluster
pub struct ClusterLister {
    client: kube::Client,
}

impl ClusterLister {
    pub fn new(client: kube::Client) -> Self {
        Self { client }
    }

    /// List raw resource descriptions for the requested kinds.
    ///
    /// Results keep per-kind API ordering, concatenated in the order of
    /// `kinds`. Typed list items omit their TypeMeta, so the kind is stamped
    /// back onto each value for the snapshot parser.
    pub async fn list(&self, namespace: Option<&str>, kinds: &[ResourceKind]) -> Vec<Value> {
        let mut values = Vec::new();

        for kind in kinds {
            match self.list_kind(*kind, namespace).await {
                Ok(mut items) => {
                    tracing::debug!("Discovered {} {} resources", items.len(), kind);
                    values.append(&mut items);
                }
                Err(e) => {
                    tracing::warn!("Error fetching {} resources: {}", kind, e);
                }
            }
        }

        values
    }

    async fn list_kind(
        &self,
        kind: ResourceKind,
        namespace: Option<&str>,
    ) -> anyhow::Result<Vec<Value>> {
        macro_rules! list_as_values {
            ($type:ty) => {{
                let api: Api<$type> = match namespace {
                    Some(ns) => Api::namespaced(self.client.clone(), ns),
                    None => Api::all(self.client.clone()),
                };
                let list = api.list(&ListParams::default()).await?;
                let mut values = Vec::with_capacity(list.items.len());
                for item in list.items {
                    let mut value = serde_json::to_value(&item)?;
                    if let Some(obj) = value.as_object_mut() {
                        obj.insert("kind".to_string(), Value::String(kind.as_str().to_string()));
                    }
                    values.push(value);
                }
                Ok(values)
            }};
        }

        match kind {
            ResourceKind::Deployment => list_as_values!(Deployment),
            ResourceKind::Service => list_as_values!(Service),
            ResourceKind::Pod => list_as_values!(Pod),
        }
    }
}
