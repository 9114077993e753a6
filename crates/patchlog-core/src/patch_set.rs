//! Ordered patch set history assembled from a change snapshot.

use crate::change::ChangeInfo;
use crate::patch_num::PatchNum;
use crate::sort::{ShaRevision, sort_revisions};
use crate::wip::{WipTags, compute_wip_state};
use serde::{Deserialize, Serialize};

/// Display-ready view of one revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchSet {
    pub num: PatchNum,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub sha: String,
    /// True if this patch set was never open for review. `None` when no
    /// message in the log mentioned it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wip: Option<bool>,
}

/// Patch sets of `change`, newest first, with WIP flags resolved using
/// the default tag sets.
pub fn compute_all_patch_sets(change: &ChangeInfo) -> Vec<PatchSet> {
    compute_all_patch_sets_with(change, &WipTags::default())
}

pub fn compute_all_patch_sets_with(change: &ChangeInfo, tags: &WipTags) -> Vec<PatchSet> {
    if change.revisions.is_empty() {
        return Vec::new();
    }

    let revisions: Vec<ShaRevision> = change
        .revisions
        .iter()
        .map(|(sha, revision)| ShaRevision {
            sha: sha.clone(),
            revision: revision.clone(),
        })
        .collect();

    let wip_state = compute_wip_state(change.work_in_progress, &change.messages, tags);

    sort_revisions(revisions)
        .into_iter()
        .map(|ShaRevision { sha, revision }| PatchSet {
            num: revision.number,
            desc: revision.description,
            sha,
            wip: revision.number.ordinal().and_then(|n| wip_state.get(n)),
        })
        .collect()
}
