//! Command-line argument definitions

use clap::{Parser, Subcommand};

use crate::model::ResourceKind;

/// catsync - Discover Kubernetes workloads and register them in an IDP catalog
#[derive(Parser, Debug)]
#[command(name = "catsync")]
#[command(about = "Discover Kubernetes workloads and register them in an IDP catalog", long_about = None)]
pub struct Args {
    /// Filter by Kubernetes namespace (default: all namespaces)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Filter by resource kind: deployment, service or pod
    /// (default: deployments and services)
    #[arg(long, short = 'k')]
    pub kind: Option<String>,

    /// Analyze and embed dependency relationships
    #[arg(long)]
    pub analyze_dependencies: bool,

    /// Also mirror rendered documents to the configured GitHub repository
    #[arg(long)]
    pub mirror: bool,

    /// Enable debug logging
    #[arg(long, short = 'd')]
    pub debug: bool,

    /// Configuration subcommand
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// Resolve the kind filter to the set of kinds to discover.
    ///
    /// Pods are only discovered when asked for explicitly.
    pub fn kinds(&self) -> Result<Vec<ResourceKind>, String> {
        match &self.kind {
            None => Ok(ResourceKind::default_set().to_vec()),
            Some(raw) => ResourceKind::from_str_case_insensitive(raw)
                .map(|kind| vec![kind])
                .ok_or_else(|| {
                    format!(
                        "Unknown resource kind: {} (expected deployment, service or pod)",
                        raw
                    )
                }),
        }
    }
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print the merged configuration
    Show,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}
