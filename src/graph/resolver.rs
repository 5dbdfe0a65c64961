//! Dependency resolution over a resource snapshot
//!
//! The resolver consumes the full snapshot once and produces a read-only
//! side-table of dependency edges per resource, in three steps:
//!
//! 1. Map each Service to the Deployments implementing it (selector match).
//! 2. Detect direct Deployment -> Service references via the configured
//!    [`DependencyDetector`].
//! 3. Propagate each direct reference to the implementing Deployments of the
//!    target Service, tagged with the intermediating service name.
//!
//! Resolution is deterministic for a fixed snapshot: records are visited in
//! discovery order and never reordered, so re-running on an unchanged cluster
//! yields an identical edge set and order.

use std::collections::{BTreeMap, HashMap};

use super::detector::{DependencyDetector, EnvSubstringDetector};
use super::edge::DependencyEdge;
use crate::model::{ResourceRecord, Snapshot};

/// Resolved dependency state for one snapshot.
///
/// Computed once by [`DependencyResolver::resolve`] and passed by reference
/// to the document builder; never mutated after construction.
#[derive(Debug, Default)]
pub struct ResolvedDependencies {
    /// Service name -> names of Deployments implementing it
    service_implementers: BTreeMap<String, Vec<String>>,
    /// Record key -> ordered dependency edges
    edges: HashMap<String, Vec<DependencyEdge>>,
}

impl ResolvedDependencies {
    /// Dependency edges for one record, in emission order
    pub fn edges_for(&self, record: &ResourceRecord) -> &[DependencyEdge] {
        self.edges.get(&record.key()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Deployments implementing the named Service
    pub fn implementers_of(&self, service_name: &str) -> &[String] {
        self.service_implementers
            .get(service_name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total number of edges across all resources
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

/// Computes dependency relationships between snapshot resources
pub struct DependencyResolver {
    detector: Box<dyn DependencyDetector>,
}

impl Default for DependencyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyResolver {
    /// Resolver with the default env-substring detector
    pub fn new() -> Self {
        Self::with_detector(Box::new(EnvSubstringDetector))
    }

    /// Resolver with a custom detection strategy
    pub fn with_detector(detector: Box<dyn DependencyDetector>) -> Self {
        Self { detector }
    }

    /// Resolve all dependency edges for `snapshot`.
    ///
    /// Never fails: malformed selectors or labels are treated as
    /// non-matching, an absent match is a normal negative result.
    pub fn resolve(&self, snapshot: &Snapshot) -> ResolvedDependencies {
        let service_implementers = map_service_implementers(snapshot);

        let mut edges: HashMap<String, Vec<DependencyEdge>> = HashMap::new();

        for deployment in snapshot.deployments() {
            let mut deployment_edges = Vec::new();

            for service in snapshot.services() {
                if !self.detector.references(deployment, service) {
                    continue;
                }

                tracing::debug!(
                    detector = self.detector.name(),
                    "{} depends on service {}",
                    deployment.name,
                    service.name
                );
                deployment_edges.push(DependencyEdge::direct(&service.name));

                // Propagate to the Deployments implementing the service,
                // skipping self-references
                if let Some(implementers) = service_implementers.get(&service.name) {
                    for implementer in implementers {
                        if *implementer == deployment.name {
                            continue;
                        }
                        tracing::debug!(
                            "{} depends on deployment {} via {}",
                            deployment.name,
                            implementer,
                            service.name
                        );
                        deployment_edges.push(DependencyEdge::indirect(implementer, &service.name));
                    }
                }
            }

            if !deployment_edges.is_empty() {
                edges.insert(deployment.key(), deployment_edges);
            }
        }

        ResolvedDependencies {
            service_implementers,
            edges,
        }
    }
}

/// Step 1: map each Service to the Deployments whose labels satisfy its
/// selector. Only services with at least one implementer get an entry.
fn map_service_implementers(snapshot: &Snapshot) -> BTreeMap<String, Vec<String>> {
    let mut map = BTreeMap::new();

    for service in snapshot.services() {
        let implementers: Vec<String> = snapshot
            .deployments()
            .filter(|dep| selector_matches(&service.selector, &dep.labels))
            .map(|dep| dep.name.clone())
            .collect();

        if !implementers.is_empty() {
            map.insert(service.name.clone(), implementers);
        }
    }

    map
}

/// True when `labels` carries every selector key with an equal value.
///
/// A selector key absent from the labels is non-matching; an empty selector
/// selects nothing.
fn selector_matches(
    selector: &BTreeMap<String, String>,
    labels: &BTreeMap<String, String>,
) -> bool {
    !selector.is_empty() && selector.iter().all(|(k, v)| labels.get(k) == Some(v))
}
