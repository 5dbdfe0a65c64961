//! Catalog synchronization service
//!
//! Drives one full run: discover resources, resolve dependencies, build a
//! document per resource, publish it to the registry, and optionally mirror
//! the rendered document to a repository. Resources are processed one at a
//! time in discovery order; one resource's failure never halts the rest.

use anyhow::Result;

use crate::catalog::{catalog_file_path, commit_message, DocumentBuilder};
use crate::config::Config;
use crate::graph::{DependencyResolver, ResolvedDependencies};
use crate::kube::ClusterLister;
use crate::model::{ResourceKind, Snapshot};
use crate::registry::{publish, EntityApi, GitDetails, SyncResult};
use crate::scm::GithubWriter;

/// Counters accumulated over one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub discovered: usize,
    pub created: usize,
    pub updated: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl RunSummary {
    pub fn published(&self) -> usize {
        self.created + self.updated
    }
}

/// Service orchestrating discovery, resolution, and publication
pub struct CatalogSyncService {
    lister: ClusterLister,
    api: Box<dyn EntityApi>,
    mirror: Option<GithubWriter>,
    config: Config,
}

impl CatalogSyncService {
    pub fn new(
        lister: ClusterLister,
        api: Box<dyn EntityApi>,
        mirror: Option<GithubWriter>,
        config: Config,
    ) -> Self {
        Self {
            lister,
            api,
            mirror,
            config,
        }
    }

    /// Run one synchronization pass.
    ///
    /// Returns the summary; partial failure is recorded there, not in the
    /// result. Zero discovered resources ends the run early with a warning.
    pub async fn run(
        &self,
        namespace: Option<&str>,
        kinds: &[ResourceKind],
        analyze_dependencies: bool,
    ) -> Result<RunSummary> {
        println!("Discovering Kubernetes resources...");
        let values = self.lister.list(namespace, kinds).await;
        let snapshot = Snapshot::from_values(&values);

        if snapshot.is_empty() {
            println!("Warning: No Kubernetes resources found with the specified filters!");
            println!("Try running without filters or with different filters.");
            return Ok(RunSummary::default());
        }
        println!("Found {} Kubernetes resources", snapshot.len());

        let resolved = if analyze_dependencies {
            let resolved = DependencyResolver::new().resolve(&snapshot);
            tracing::debug!("Resolved {} dependency edges", resolved.edge_count());
            resolved
        } else {
            ResolvedDependencies::default()
        };

        let builder = DocumentBuilder::new(
            &self.config.registry.org_identifier,
            &self.config.registry.project_identifier,
            &self.config.catalog.owner,
            &self.config.catalog.lifecycle,
        );

        let mut summary = RunSummary {
            discovered: snapshot.len(),
            ..Default::default()
        };

        for record in snapshot.records() {
            println!(
                "\nProcessing {} {} in namespace {}...",
                record.kind, record.name, record.namespace
            );

            let Some(document) = builder.build(record, resolved.edges_for(record)) else {
                println!(
                    "Skipping {} {}: Pods are not registered as components",
                    record.kind.as_lower(),
                    record.name
                );
                summary.skipped += 1;
                continue;
            };

            let file_path = catalog_file_path(record);
            let git_details = GitDetails::remote(
                &self.config.git.branch,
                &file_path,
                commit_message(record),
                &self.config.git.connector_ref,
                &self.config.git.repo_name,
            );

            match publish(self.api.as_ref(), &document, git_details).await {
                SyncResult::Created => {
                    println!("✓ Registered {} in the catalog", document.identifier);
                    summary.created += 1;
                }
                SyncResult::Updated => {
                    println!("✓ Updated {} in the catalog", document.identifier);
                    summary.updated += 1;
                }
                SyncResult::Failed { reason } => {
                    println!("✗ Failed to register {}: {}", document.identifier, reason);
                    summary.failed += 1;
                }
            }

            if let Some(mirror) = &self.mirror {
                match mirror
                    .put_file(&file_path, &document.to_yaml(), &commit_message(record))
                    .await
                {
                    Ok(result) => println!("✓ Mirrored {} to git ({:?})", file_path, result),
                    Err(e) => println!("✗ Mirror write failed for {}: {:#}", file_path, e),
                }
            }
        }

        Ok(summary)
    }
}
