//! Idempotent publish protocol
//!
//! One publish attempt walks a small state machine:
//! `Pending -> {Created, Updated, Failed}`, with
//! `Pending -> Conflict -> {Updated, Failed}` as the sole retry path. A plain
//! create is tried first; a recognized conflict triggers exactly one retry in
//! upsert mode. Nothing here escalates to a process failure.

use super::api::{EntityApi, EntityPayload, GitDetails, OperationMode};
use super::SyncResult;
use crate::catalog::CatalogDocument;

/// Response bodies carried this many characters into failure reasons
const REASON_BODY_LIMIT: usize = 200;

/// Conflict markers the registry is known to emit on a 400
const CONFLICT_MARKERS: &[&str] = &["already exists", "does not match", "already a file"];

/// Whether a response indicates the entity or its path already exists
pub fn is_conflict(status: u16, body: &str) -> bool {
    if status != 400 {
        return false;
    }
    let body = body.to_lowercase();
    CONFLICT_MARKERS.iter().any(|marker| body.contains(marker))
}

/// Publish a document to the registry at the given version-control placement.
///
/// Transport failures and registry errors become a `Failed` result, never an
/// `Err`: one resource's failure must not halt the processing of the rest.
pub async fn publish(
    api: &dyn EntityApi,
    document: &CatalogDocument,
    git_details: GitDetails,
) -> SyncResult {
    let payload = EntityPayload {
        yaml: document.to_yaml(),
        git_details,
    };

    let response = match api.submit(OperationMode::Create, &payload).await {
        Ok(response) => response,
        Err(e) => {
            return SyncResult::Failed {
                reason: format!("transport error: {:#}", e),
            };
        }
    };

    if response.is_success() {
        return SyncResult::Created;
    }

    if !is_conflict(response.status, &response.body) {
        return SyncResult::Failed {
            reason: failure_reason(response.status, &response.body),
        };
    }

    tracing::debug!(
        "{} already present, retrying in upsert mode",
        document.identifier
    );

    match api.submit(OperationMode::Upsert, &payload).await {
        Ok(retry) if retry.is_success() => SyncResult::Updated,
        Ok(retry) => SyncResult::Failed {
            reason: failure_reason(retry.status, &retry.body),
        },
        Err(e) => SyncResult::Failed {
            reason: format!("transport error: {:#}", e),
        },
    }
}

fn failure_reason(status: u16, body: &str) -> String {
    let truncated: String = body.chars().take(REASON_BODY_LIMIT).collect();
    format!("registry returned {}: {}", status, truncated)
}
