//! Snapshot of discovered cluster resources
//!
//! A [`Snapshot`] holds every record from one discovery pass plus two derived
//! indices for O(1) lookup by the dependency resolver. It is a read-only
//! transform over the raw lister output; building it has no side effects.

use std::collections::HashMap;

use serde_json::Value;

use super::kind::ResourceKind;
use super::record::ResourceRecord;

/// All records from one discovery pass, in discovery order, with lookup
/// indices over kind+name and service name.
#[derive(Debug, Default)]
pub struct Snapshot {
    records: Vec<ResourceRecord>,
    /// (kind, name) -> index into `records`. Same-named resources in
    /// different namespaces resolve to the last one discovered; dependency
    /// detection is name-scoped, matching the reference heuristic.
    by_kind_and_name: HashMap<(ResourceKind, String), usize>,
    /// Service name -> index into `records`
    services_by_name: HashMap<String, usize>,
}

impl Snapshot {
    /// Build a snapshot from raw resource descriptions, skipping objects
    /// whose mandatory fields are absent.
    pub fn from_values(values: &[Value]) -> Self {
        let records = values.iter().filter_map(ResourceRecord::from_value).collect();
        Self::from_records(records)
    }

    /// Build a snapshot from already-normalized records.
    pub fn from_records(records: Vec<ResourceRecord>) -> Self {
        let mut by_kind_and_name = HashMap::new();
        let mut services_by_name = HashMap::new();

        for (idx, record) in records.iter().enumerate() {
            by_kind_and_name.insert((record.kind, record.name.clone()), idx);
            if record.kind == ResourceKind::Service {
                services_by_name.insert(record.name.clone(), idx);
            }
        }

        Self {
            records,
            by_kind_and_name,
            services_by_name,
        }
    }

    /// All records in discovery order
    pub fn records(&self) -> &[ResourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record by kind and name
    pub fn get(&self, kind: ResourceKind, name: &str) -> Option<&ResourceRecord> {
        self.by_kind_and_name
            .get(&(kind, name.to_string()))
            .map(|&idx| &self.records[idx])
    }

    /// Look up a Service record by name
    pub fn service(&self, name: &str) -> Option<&ResourceRecord> {
        self.services_by_name.get(name).map(|&idx| &self.records[idx])
    }

    /// Iterate Services in discovery order
    pub fn services(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == ResourceKind::Service)
    }

    /// Iterate Deployments in discovery order
    pub fn deployments(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.records
            .iter()
            .filter(|r| r.kind == ResourceKind::Deployment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_values() -> Vec<Value> {
        vec![
            json!({
                "kind": "Service",
                "metadata": {"name": "orders", "namespace": "shop"},
                "spec": {"selector": {"app": "orders"}}
            }),
            json!({
                "kind": "Deployment",
                "metadata": {"name": "orders", "namespace": "shop", "labels": {"app": "orders"}},
                "spec": {"selector": {"matchLabels": {"app": "orders"}}}
            }),
            // Missing namespace: must be skipped
            json!({
                "kind": "Service",
                "metadata": {"name": "broken"}
            }),
        ]
    }

    #[test]
    fn test_from_values_skips_invalid() {
        let snapshot = Snapshot::from_values(&sample_values());
        assert_eq!(snapshot.len(), 2);
    }

    #[test]
    fn test_indices() {
        let snapshot = Snapshot::from_values(&sample_values());

        let svc = snapshot.service("orders").unwrap();
        assert_eq!(svc.kind, ResourceKind::Service);

        // Same name, different kind: both indexed independently
        let dep = snapshot.get(ResourceKind::Deployment, "orders").unwrap();
        assert_eq!(dep.kind, ResourceKind::Deployment);

        assert!(snapshot.service("missing").is_none());
        assert!(snapshot.get(ResourceKind::Pod, "orders").is_none());
    }

    #[test]
    fn test_discovery_order_preserved() {
        let snapshot = Snapshot::from_values(&sample_values());
        assert_eq!(snapshot.records()[0].kind, ResourceKind::Service);
        assert_eq!(snapshot.records()[1].kind, ResourceKind::Deployment);
    }
}
