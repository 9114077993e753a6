//! Staleness check for a loaded change.

use crate::source::{ChangeDetailSource, FetchError};
use patchlog_core::{ChangeInfo, ChangeStatus, compute_all_patch_sets, compute_latest_patch_num};
use serde::Serialize;

/// What changed on the server since `known` was loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeUpdates {
    /// No patch set newer than the known latest has been uploaded.
    pub is_latest: bool,
    /// The server's status, when it differs from the known one.
    pub new_status: Option<ChangeStatus>,
    pub new_messages: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum UpdateError {
    #[error("change detail not found: {0}")]
    DetailNotFound(u64),

    #[error("unable to check for latest patch set of change {0}")]
    IndeterminateLatest(u64),

    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Fetch the current detail of `known` and compare histories.
///
/// Fails with [`UpdateError::DetailNotFound`] when the source has no such
/// change and with [`UpdateError::IndeterminateLatest`] when either side
/// has no numbered patch set. Source failures are returned as-is.
pub async fn fetch_change_updates<S>(
    known: &ChangeInfo,
    source: &S,
) -> Result<ChangeUpdates, UpdateError>
where
    S: ChangeDetailSource + ?Sized,
{
    let known_latest = compute_latest_patch_num(&compute_all_patch_sets(known));

    let detail = source
        .change_detail(known.number)
        .await?
        .ok_or(UpdateError::DetailNotFound(known.number))?;

    let actual_latest = compute_latest_patch_num(&compute_all_patch_sets(&detail));

    let (Some(known_latest), Some(actual_latest)) = (known_latest, actual_latest) else {
        return Err(UpdateError::IndeterminateLatest(known.number));
    };

    let updates = ChangeUpdates {
        is_latest: actual_latest <= known_latest,
        new_status: (known.status != detail.status).then_some(detail.status),
        new_messages: known.message_count() < detail.message_count(),
    };

    if !updates.is_latest {
        tracing::info!(
            change = known.number,
            known_latest,
            actual_latest,
            "newer patch set uploaded"
        );
    }

    Ok(updates)
}
