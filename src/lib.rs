//! catsync library
//!
//! This library provides the core functionality for the catsync CLI:
//! discovering Kubernetes workload resources, inferring the dependency
//! relationships between them, and synchronizing catalog documents to an
//! external IDP registry.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod graph;
pub mod kube;
pub mod model;
pub mod registry;
pub mod scm;
pub mod services;

// Re-export commonly used types for convenience
pub use catalog::{CatalogDocument, DocumentBuilder};
pub use graph::{DependencyDetector, DependencyEdge, DependencyResolver, ResolvedDependencies};
pub use model::{ResourceKind, ResourceRecord, Snapshot};
pub use registry::SyncResult;
