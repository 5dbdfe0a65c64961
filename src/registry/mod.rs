//! Registry synchronization
//!
//! Publishes catalog documents to the external registry's entity API with
//! create/update/upsert semantics and per-resource failure reporting.

pub mod api;
pub mod client;
pub mod publish;

pub use api::{EntityApi, EntityPayload, GitDetails, OperationMode};
pub use client::RegistryClient;
pub use publish::{is_conflict, publish};

use std::fmt;

/// Outcome of one publish attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncResult {
    /// The registry created a new entity
    Created,
    /// The entity existed and was updated via the upsert fallback
    Updated,
    /// The write failed; reason carries the registry status and a truncated
    /// response body, or the transport error
    Failed { reason: String },
}

impl SyncResult {
    pub fn is_success(&self) -> bool {
        !matches!(self, SyncResult::Failed { .. })
    }
}

impl fmt::Display for SyncResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncResult::Created => write!(f, "created"),
            SyncResult::Updated => write!(f, "updated"),
            SyncResult::Failed { reason } => write!(f, "failed: {}", reason),
        }
    }
}
