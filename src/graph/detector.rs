//! Dependency detection strategies
//!
//! A detector decides whether one resource references a Service in its
//! configuration. The resolver loop is agnostic to the strategy, so stricter
//! matchers (exact env-var naming conventions) can be substituted without
//! touching it.

use crate::model::ResourceRecord;

/// Strategy deciding whether `consumer` references `service`
pub trait DependencyDetector: Send + Sync {
    /// Detector name, for logs
    fn name(&self) -> &'static str;

    /// True when `consumer` carries a reference to `service`
    fn references(&self, consumer: &ResourceRecord, service: &ResourceRecord) -> bool;
}

/// Default detector: the service name appears as a case-insensitive substring
/// of any container environment value.
///
/// Inherently approximate: a service name that happens to be a substring of
/// an unrelated value produces a false positive. Accepted as the documented
/// heuristic; swap the detector for something stricter where that matters.
#[derive(Debug, Default)]
pub struct EnvSubstringDetector;

impl DependencyDetector for EnvSubstringDetector {
    fn name(&self) -> &'static str {
        "env-substring"
    }

    fn references(&self, consumer: &ResourceRecord, service: &ResourceRecord) -> bool {
        if consumer.env_refs.is_empty() {
            return false;
        }
        let needle = service.name.to_lowercase();
        consumer
            .env_refs
            .values()
            .any(|value| value.to_lowercase().contains(&needle))
    }
}
