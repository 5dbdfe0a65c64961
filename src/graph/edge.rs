//! Data structures for resolved dependency edges

use crate::model::ResourceKind;

/// A directed relation from a consuming resource to a depended-on resource.
///
/// The consuming resource is the key under which the edge is stored in
/// [`ResolvedDependencies`](super::resolver::ResolvedDependencies); edges are
/// derived on every run and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    /// Name of the depended-on resource
    pub to_name: String,
    /// Kind of the depended-on resource (Service or Deployment)
    pub to_kind: ResourceKind,
    /// Name of the intermediating Service, present only on indirect edges
    pub via: Option<String>,
}

impl DependencyEdge {
    /// A direct edge to a Service referenced from configuration
    pub fn direct(to_name: impl Into<String>) -> Self {
        Self {
            to_name: to_name.into(),
            to_kind: ResourceKind::Service,
            via: None,
        }
    }

    /// An indirect edge to a Deployment reached through a Service
    pub fn indirect(to_name: impl Into<String>, via: impl Into<String>) -> Self {
        Self {
            to_name: to_name.into(),
            to_kind: ResourceKind::Deployment,
            via: Some(via.into()),
        }
    }

    pub fn is_direct(&self) -> bool {
        self.via.is_none()
    }
}
