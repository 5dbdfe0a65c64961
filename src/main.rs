//! catsync - Discover Kubernetes workloads and register them in an IDP catalog
//!
//! Discovers Deployments, Services and (optionally) Pods, infers the
//! dependency relationships between them, and publishes a catalog document
//! for each to the configured registry.

use anyhow::{Context, Result};
use clap::Parser;

use catsync::cli::{self, Args, Command};
use catsync::config::ConfigLoader;
use catsync::kube::{self, ClusterLister};
use catsync::registry::RegistryClient;
use catsync::scm::GithubWriter;
use catsync::services::CatalogSyncService;

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = Args::parse();

    // Handle config subcommand before anything touches the cluster
    if let Some(Command::Config { subcommand }) = args.command.take() {
        return cli::handle_config_command(subcommand);
    }

    cli::init_logging(args.debug);

    let kinds = args.kinds().map_err(|e| anyhow::anyhow!(e))?;

    println!("=== Kubernetes Catalog Population ===");
    println!(
        "Namespace filter: {}",
        args.namespace.as_deref().unwrap_or("All namespaces")
    );
    println!(
        "Resource kind filter: {}",
        args.kind.as_deref().unwrap_or("Deployments and Services")
    );
    if args.analyze_dependencies {
        println!("Dependency analysis: Enabled");
    }

    // Load and validate configuration
    let config = ConfigLoader::load().context("Failed to load configuration")?;
    ConfigLoader::validate(&config).context("Configuration is incomplete")?;

    // Optional GitHub mirror
    let mirror = if args.mirror {
        let github = config
            .github
            .as_ref()
            .context("--mirror requires a github section in the configuration")?;
        Some(GithubWriter::new(github)?)
    } else {
        None
    };

    // Initialize Kubernetes and registry clients
    tracing::debug!("Initializing Kubernetes client");
    let client = kube::create_client()
        .await
        .context("Error connecting to Kubernetes cluster")?;
    let registry = RegistryClient::new(&config.registry)?;

    let service = CatalogSyncService::new(
        ClusterLister::new(client),
        Box::new(registry),
        mirror,
        config,
    );

    let summary = service
        .run(args.namespace.as_deref(), &kinds, args.analyze_dependencies)
        .await?;

    println!("\n=== Summary ===");
    println!("Total resources processed: {}", summary.discovered);
    println!("Successfully registered in catalog: {}", summary.published());
    if summary.skipped > 0 {
        println!("Skipped (not catalog-eligible): {}", summary.skipped);
    }
    if summary.failed > 0 {
        println!("Failed: {}", summary.failed);
    }

    // Partial failure does not change the exit code; the summary carries it
    Ok(())
}
