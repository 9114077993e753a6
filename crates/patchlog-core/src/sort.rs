//! Edit-aware revision lookups and ordering.

use crate::change::RevisionInfo;
use crate::patch_num::{PatchNum, sort_key};

/// Anything that carries a revision's number and edit base.
pub trait Revision {
    fn patch_num(&self) -> PatchNum;
    fn base_patch_num(&self) -> Option<u32>;
}

impl Revision for RevisionInfo {
    fn patch_num(&self) -> PatchNum {
        self.number
    }

    fn base_patch_num(&self) -> Option<u32> {
        self.base_patch_num
    }
}

impl<T: Revision> Revision for &T {
    fn patch_num(&self) -> PatchNum {
        (*self).patch_num()
    }

    fn base_patch_num(&self) -> Option<u32> {
        (*self).base_patch_num()
    }
}

/// A revision together with the commit hash it was keyed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaRevision {
    pub sha: String,
    pub revision: RevisionInfo,
}

impl Revision for ShaRevision {
    fn patch_num(&self) -> PatchNum {
        self.revision.number
    }

    fn base_patch_num(&self) -> Option<u32> {
        self.revision.base_patch_num
    }
}

/// First revision numbered `num`.
pub fn get_revision_by_patch_num<T: Revision>(revisions: &[T], num: PatchNum) -> Option<&T> {
    let found = revisions.iter().find(|rev| rev.patch_num() == num);
    if found.is_none() {
        tracing::warn!(patch_num = %num, "no revision found");
    }
    found
}

/// The revision the change edit was created on, if there is an edit and
/// its base is present.
pub fn find_edit_parent_revision<T: Revision>(revisions: &[T]) -> Option<&T> {
    let edit = revisions.iter().find(|rev| rev.patch_num().is_edit())?;
    let base = edit.base_patch_num()?;
    revisions
        .iter()
        .find(|rev| rev.patch_num() == PatchNum::Ordinal(base))
}

/// Ordinal of the edit's parent. `None` when there is no edit or the
/// parent is not among `revisions`.
pub fn find_edit_parent_patch_num<T: Revision>(revisions: &[T]) -> Option<u32> {
    find_edit_parent_revision(revisions).and_then(|rev| rev.patch_num().ordinal())
}

/// Sort revisions newest first. The edit lands directly after the patch
/// set it was based on, e.g. `3, edit, 2, 1` for an edit on 2.
pub fn sort_revisions<T: Revision>(mut revisions: Vec<T>) -> Vec<T> {
    let has_edit = revisions.iter().any(|rev| rev.patch_num().is_edit());
    let edit_parent = find_edit_parent_patch_num(&revisions);
    if has_edit && edit_parent.is_none() {
        tracing::debug!("change edit has no resolvable parent; sorting it last");
    }
    let edit_parent = edit_parent.unwrap_or(0);
    revisions.sort_by_key(|rev| std::cmp::Reverse(sort_key(rev.patch_num(), edit_parent)));
    revisions
}
