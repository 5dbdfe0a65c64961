//! Catalog entity documents
//!
//! Builds the declarative document registered for one resource. The document
//! is a typed model rendered to YAML in a single pass, so the output is
//! well-formed by construction and the renderer is testable independent of
//! any transport.

use crate::graph::DependencyEdge;
use crate::model::{ResourceKind, ResourceRecord};

use super::identifier;

/// One entry of the document's dependsOn list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependsOnRef {
    /// Catalog reference, e.g. `Component:orders`
    pub reference: String,
    /// Intermediating service name for indirect dependencies
    pub via: Option<String>,
}

/// The declarative unit pushed to the registry
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogDocument {
    pub identifier: String,
    pub display_name: String,
    pub org_identifier: String,
    pub project_identifier: String,
    pub owner: String,
    pub lifecycle: String,
    /// Resource kind recorded as the component subtype
    pub subtype: ResourceKind,
    pub depends_on: Vec<DependsOnRef>,
    pub description: String,
    pub tags: Vec<String>,
}

/// Renders catalog documents for discovered resources
pub struct DocumentBuilder {
    org_identifier: String,
    project_identifier: String,
    owner: String,
    lifecycle: String,
}

impl DocumentBuilder {
    pub fn new(
        org_identifier: impl Into<String>,
        project_identifier: impl Into<String>,
        owner: impl Into<String>,
        lifecycle: impl Into<String>,
    ) -> Self {
        Self {
            org_identifier: org_identifier.into(),
            project_identifier: project_identifier.into(),
            owner: owner.into(),
            lifecycle: lifecycle.into(),
        }
    }

    /// Build the catalog document for one resource, embedding its resolved
    /// dependency edges.
    ///
    /// Returns `None` for Pods: they are ephemeral and never registered.
    /// Duplicate references (the same target reached by a direct and an
    /// indirect edge) are kept as-is; the registry treats dependsOn as an
    /// informational list.
    pub fn build(
        &self,
        record: &ResourceRecord,
        edges: &[DependencyEdge],
    ) -> Option<CatalogDocument> {
        if !record.kind.is_catalog_eligible() {
            tracing::debug!(
                "skipping {} {}: not registered as a component",
                record.kind,
                record.name
            );
            return None;
        }

        let depends_on = edges
            .iter()
            .map(|edge| DependsOnRef {
                reference: format!("Component:{}", edge.to_name),
                via: edge.via.clone(),
            })
            .collect();

        Some(CatalogDocument {
            identifier: identifier::generate(&record.name, &record.namespace, record.kind),
            display_name: record.name.clone(),
            org_identifier: self.org_identifier.clone(),
            project_identifier: self.project_identifier.clone(),
            owner: self.owner.clone(),
            lifecycle: self.lifecycle.clone(),
            subtype: record.kind,
            depends_on,
            description: format!(
                "Kubernetes {} {} in namespace {}",
                record.kind, record.name, record.namespace
            ),
            tags: vec![
                "kubernetes".to_string(),
                "auto-onboarded".to_string(),
                record.namespace.clone(),
                record.kind.as_lower().to_string(),
            ],
        })
    }
}

impl CatalogDocument {
    /// Serialize the document to registry YAML.
    ///
    /// Single pass over the typed model. Indirect dependency references are
    /// preceded by a comment line naming the intermediating service, which is
    /// why this renderer exists instead of a serde serializer: the annotation
    /// is a YAML comment, not data.
    pub fn to_yaml(&self) -> String {
        let mut out = String::new();

        out.push_str("apiVersion: harness.io/v1\n");
        out.push_str("kind: component\n");
        out.push_str(&format!("orgIdentifier: {}\n", self.org_identifier));
        out.push_str(&format!("projectIdentifier: {}\n", self.project_identifier));
        out.push_str("type: Service\n");
        out.push_str(&format!("identifier: {}\n", self.identifier));
        out.push_str(&format!("name: \"{}\"\n", self.display_name));
        out.push_str(&format!("owner: {}\n", self.owner));

        out.push_str("spec:\n");
        if !self.depends_on.is_empty() {
            out.push_str("  dependsOn:\n");
            for dep in &self.depends_on {
                if let Some(via) = &dep.via {
                    out.push_str(&format!("    # via service {}\n", via));
                }
                out.push_str(&format!("    - {}\n", dep.reference));
            }
        }
        out.push_str(&format!("  lifecycle: {}\n", self.lifecycle));
        out.push_str("  type: kubernetes\n");
        out.push_str(&format!("  subtype: {}\n", self.subtype));

        out.push_str("metadata:\n");
        out.push_str(&format!("  description: \"{}\"\n", self.description));
        out.push_str("  tags:\n");
        for tag in &self.tags {
            out.push_str(&format!("    - {}\n", tag));
        }

        out
    }
}

/// Target path of the document inside the catalog repository
pub fn catalog_file_path(record: &ResourceRecord) -> String {
    format!(
        "{}/{}/{}/idp.yaml",
        record.namespace,
        record.kind.as_lower(),
        record.name
    )
}

/// Commit message used for the registry's version-control write
pub fn commit_message(record: &ResourceRecord) -> String {
    format!(
        "Add {} {} from namespace {}",
        record.kind, record.name, record.namespace
    )
}
