//! # patchlog-core
//!
//! Reconstructs the ordered patch set history of a reviewed change from
//! its revision map and its message log.
//!
//! Everything here is a synchronous, allocation-local derivation: inputs
//! are borrowed, outputs are fresh values.
//!
//! ## Data flow
//!
//! ```text
//! ChangeInfo.revisions ── sort_revisions ─┐
//!                                         ├─ compute_all_patch_sets ─→ Vec<PatchSet>
//! ChangeInfo.messages ─ compute_wip_state ┘                               │
//!                                                  compute_latest_patch_num, ...
//! ```

pub mod change;
pub mod error;
pub mod patch_num;
pub mod patch_set;
pub mod query;
pub mod sort;
pub mod wip;

pub use change::{ChangeInfo, ChangeMessageInfo, ChangeStatus, RevisionInfo};
pub use error::CoreError;
pub use patch_num::{
    BasePatchNum, EDIT_PATCH_NUM, PARENT_PATCH_NUM, PatchNum, PatchNumError, PatchRange,
    sort_key,
};
pub use patch_set::{PatchSet, compute_all_patch_sets, compute_all_patch_sets_with};
pub use query::{
    compute_latest_patch_num, find_sorted_index, has_edit_based_on_current_patch_set,
    has_edit_patchset_loaded,
};
pub use sort::{
    Revision, ShaRevision, find_edit_parent_patch_num, find_edit_parent_revision,
    get_revision_by_patch_num, sort_revisions,
};
pub use wip::{READY_TAGS, WIP_TAGS, WipState, WipTags, compute_wip_state};
