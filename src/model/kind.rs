//! Workload resource kind definitions
//!
//! This module provides a centralized enum for the Kubernetes resource kinds
//! catsync discovers. This eliminates hardcoded strings throughout the
//! codebase and provides type safety for kind references.

use std::fmt;
use std::str::FromStr;

/// Enumeration of the workload resource kinds handled by catsync
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Deployment,
    Service,
    Pod,
}

impl ResourceKind {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "Deployment",
            ResourceKind::Service => "Service",
            ResourceKind::Pod => "Pod",
        }
    }

    /// Lower-cased form, used in catalog tags and file paths
    pub fn as_lower(&self) -> &'static str {
        match self {
            ResourceKind::Deployment => "deployment",
            ResourceKind::Service => "service",
            ResourceKind::Pod => "pod",
        }
    }

    /// Get all resource kinds
    pub fn all() -> &'static [Self] {
        &[
            ResourceKind::Deployment,
            ResourceKind::Service,
            ResourceKind::Pod,
        ]
    }

    /// The kinds discovered when no kind filter is given.
    ///
    /// Pods are excluded by default because they are ephemeral and do not
    /// represent stable ownership boundaries.
    pub fn default_set() -> &'static [Self] {
        &[ResourceKind::Deployment, ResourceKind::Service]
    }

    /// Try to parse a string (case-insensitive) into a ResourceKind
    pub fn from_str_case_insensitive(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deployment" | "deployments" | "deploy" => Some(ResourceKind::Deployment),
            "service" | "services" | "svc" => Some(ResourceKind::Service),
            "pod" | "pods" | "po" => Some(ResourceKind::Pod),
            _ => None,
        }
    }

    /// Whether resources of this kind are registered in the catalog.
    ///
    /// Pods never produce a catalog document.
    pub fn is_catalog_eligible(&self) -> bool {
        !matches!(self, ResourceKind::Pod)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Deployment" => Ok(ResourceKind::Deployment),
            "Service" => Ok(ResourceKind::Service),
            "Pod" => Ok(ResourceKind::Pod),
            _ => Err(format!("Unknown resource kind: {}", s)),
        }
    }
}

impl From<ResourceKind> for String {
    fn from(kind: ResourceKind) -> Self {
        kind.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(
            ResourceKind::from_str_case_insensitive("deployment"),
            Some(ResourceKind::Deployment)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("Deploy"),
            Some(ResourceKind::Deployment)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("svc"),
            Some(ResourceKind::Service)
        );
        assert_eq!(
            ResourceKind::from_str_case_insensitive("PODS"),
            Some(ResourceKind::Pod)
        );
        assert_eq!(ResourceKind::from_str_case_insensitive("ingress"), None);
    }

    #[test]
    fn test_display_roundtrip() {
        for kind in ResourceKind::all() {
            assert_eq!(kind.as_str().parse::<ResourceKind>().unwrap(), *kind);
        }
    }

    #[test]
    fn test_default_set_excludes_pods() {
        assert!(!ResourceKind::default_set().contains(&ResourceKind::Pod));
        assert!(ResourceKind::default_set().contains(&ResourceKind::Deployment));
        assert!(ResourceKind::default_set().contains(&ResourceKind::Service));
    }

    #[test]
    fn test_catalog_eligibility() {
        assert!(ResourceKind::Deployment.is_catalog_eligible());
        assert!(ResourceKind::Service.is_catalog_eligible());
        assert!(!ResourceKind::Pod.is_catalog_eligible());
    }
}
