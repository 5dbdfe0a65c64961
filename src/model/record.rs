//! Normalized resource records
//!
//! A [`ResourceRecord`] is the in-memory representation of one discovered
//! cluster object, extracted from the raw Kubernetes JSON returned by the
//! lister. Records are constructed fresh on every discovery pass and are
//! immutable afterwards.

use std::collections::BTreeMap;

use serde_json::Value;

use super::kind::ResourceKind;

/// One discovered cluster object, normalized for dependency resolution.
///
/// `(name, namespace, kind)` uniquely identifies a record within a snapshot.
/// Label maps use `BTreeMap` so iteration order is stable across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,
    pub namespace: String,
    pub kind: ResourceKind,
    /// Metadata labels, may be empty
    pub labels: BTreeMap<String, String>,
    /// Label selector (Service and Deployment), empty otherwise
    pub selector: BTreeMap<String, String>,
    /// Container environment values (Deployment only), used for dependency
    /// inference. Entries with `valueFrom` references are not captured.
    pub env_refs: BTreeMap<String, String>,
}

impl ResourceRecord {
    /// Stable key identifying this record within a snapshot
    pub fn key(&self) -> String {
        format!("{}:{}:{}", self.kind, self.namespace, self.name)
    }

    /// Parse a raw Kubernetes object into a record.
    ///
    /// Returns `None` when any mandatory field (kind, metadata.name,
    /// metadata.namespace) is absent or the kind is not one catsync handles.
    /// Selector and env extraction follow the shape of the typed API objects:
    /// `spec.selector.matchLabels` for Deployments, `spec.selector` for
    /// Services, container env entries with a literal `value`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let kind = value
            .get("kind")
            .and_then(|k| k.as_str())
            .and_then(|k| k.parse::<ResourceKind>().ok())?;

        let metadata = value.get("metadata")?;
        let name = metadata.get("name").and_then(|n| n.as_str())?.to_string();
        let namespace = metadata
            .get("namespace")
            .and_then(|n| n.as_str())?
            .to_string();

        let labels = string_map(metadata.get("labels"));

        let selector = match kind {
            ResourceKind::Deployment => {
                string_map(value.pointer("/spec/selector/matchLabels"))
            }
            ResourceKind::Service => string_map(value.pointer("/spec/selector")),
            ResourceKind::Pod => BTreeMap::new(),
        };

        let env_refs = match kind {
            ResourceKind::Deployment => extract_env_refs(value),
            _ => BTreeMap::new(),
        };

        Some(Self {
            name,
            namespace,
            kind,
            labels,
            selector,
            env_refs,
        })
    }
}

/// Convert an optional JSON object into a string map, ignoring non-string
/// values. Absent or malformed input yields an empty map, never an error.
fn string_map(value: Option<&Value>) -> BTreeMap<String, String> {
    value
        .and_then(|v| v.as_object())
        .map(|obj| {
            obj.iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

/// Collect literal container environment values from a Deployment object.
fn extract_env_refs(value: &Value) -> BTreeMap<String, String> {
    let mut env_refs = BTreeMap::new();

    let containers = value
        .pointer("/spec/template/spec/containers")
        .and_then(|c| c.as_array());

    if let Some(containers) = containers {
        for container in containers {
            let Some(env) = container.get("env").and_then(|e| e.as_array()) else {
                continue;
            };
            for entry in env {
                let (Some(name), Some(val)) = (
                    entry.get("name").and_then(|n| n.as_str()),
                    entry.get("value").and_then(|v| v.as_str()),
                ) else {
                    continue;
                };
                env_refs.insert(name.to_string(), val.to_string());
            }
        }
    }

    env_refs
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deployment_from_value() {
        let raw = json!({
            "kind": "Deployment",
            "metadata": {
                "name": "web",
                "namespace": "shop",
                "labels": {"app": "web", "tier": "frontend"}
            },
            "spec": {
                "selector": {"matchLabels": {"app": "web"}},
                "template": {
                    "spec": {
                        "containers": [
                            {
                                "name": "main",
                                "env": [
                                    {"name": "API_URL", "value": "http://orders:8080"},
                                    {"name": "SECRET", "valueFrom": {"secretKeyRef": {"name": "s", "key": "k"}}}
                                ]
                            }
                        ]
                    }
                }
            }
        });

        let record = ResourceRecord::from_value(&raw).unwrap();
        assert_eq!(record.kind, ResourceKind::Deployment);
        assert_eq!(record.name, "web");
        assert_eq!(record.namespace, "shop");
        assert_eq!(record.labels.get("tier").unwrap(), "frontend");
        assert_eq!(record.selector.get("app").unwrap(), "web");
        assert_eq!(record.env_refs.get("API_URL").unwrap(), "http://orders:8080");
        // valueFrom entries carry no literal value and are not captured
        assert!(!record.env_refs.contains_key("SECRET"));
    }

    #[test]
    fn test_service_from_value() {
        let raw = json!({
            "kind": "Service",
            "metadata": {"name": "orders", "namespace": "shop"},
            "spec": {"selector": {"app": "orders"}}
        });

        let record = ResourceRecord::from_value(&raw).unwrap();
        assert_eq!(record.kind, ResourceKind::Service);
        assert_eq!(record.selector.get("app").unwrap(), "orders");
        assert!(record.env_refs.is_empty());
    }

    #[test]
    fn test_missing_mandatory_fields_skipped() {
        assert!(ResourceRecord::from_value(&json!({"kind": "Service"})).is_none());
        assert!(
            ResourceRecord::from_value(&json!({
                "kind": "Service",
                "metadata": {"name": "no-namespace"}
            }))
            .is_none()
        );
        assert!(
            ResourceRecord::from_value(&json!({
                "metadata": {"name": "n", "namespace": "ns"}
            }))
            .is_none()
        );
        // Unknown kinds are not catsync's concern
        assert!(
            ResourceRecord::from_value(&json!({
                "kind": "ConfigMap",
                "metadata": {"name": "n", "namespace": "ns"}
            }))
            .is_none()
        );
    }

    #[test]
    fn test_malformed_selector_is_empty() {
        let raw = json!({
            "kind": "Service",
            "metadata": {"name": "svc", "namespace": "ns"},
            "spec": {"selector": "not-a-map"}
        });

        let record = ResourceRecord::from_value(&raw).unwrap();
        assert!(record.selector.is_empty());
    }

    #[test]
    fn test_record_key() {
        let raw = json!({
            "kind": "Pod",
            "metadata": {"name": "web-abc", "namespace": "shop"}
        });
        let record = ResourceRecord::from_value(&raw).unwrap();
        assert_eq!(record.key(), "Pod:shop:web-abc");
    }
}
