//! Questions asked of an assembled history.

use crate::patch_num::{BasePatchNum, PatchNum, PatchRange};
use crate::patch_set::PatchSet;

/// Number of the newest uploaded patch set, skipping a leading edit.
pub fn compute_latest_patch_num(patch_sets: &[PatchSet]) -> Option<u32> {
    let first = patch_sets.first()?;
    if first.num.is_edit() {
        return patch_sets.get(1).and_then(|ps| ps.num.ordinal());
    }
    first.num.ordinal()
}

/// True when the edit sits on top of the newest patch set.
pub fn has_edit_based_on_current_patch_set(patch_sets: &[PatchSet]) -> bool {
    patch_sets.len() >= 2 && patch_sets[0].num.is_edit()
}

/// True when either side of the viewed range is the edit.
pub fn has_edit_patchset_loaded(range: &PatchRange) -> bool {
    range.patch_num == Some(PatchNum::Edit)
        || range.base_patch_num == Some(BasePatchNum::PatchSet(PatchNum::Edit))
}

/// Position of `num` in a sorted history.
pub fn find_sorted_index(num: PatchNum, patch_sets: &[PatchSet]) -> Option<usize> {
    patch_sets.iter().position(|ps| ps.num == num)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ps(num: PatchNum) -> PatchSet {
        PatchSet {
            num,
            desc: None,
            sha: num.to_string(),
            wip: None,
        }
    }

    #[test]
    fn latest_skips_leading_edit() {
        let history = vec![
            ps(PatchNum::Edit),
            ps(PatchNum::Ordinal(3)),
            ps(PatchNum::Ordinal(2)),
        ];
        assert_eq!(compute_latest_patch_num(&history), Some(3));
        assert_eq!(compute_latest_patch_num(&history[1..]), Some(3));
        assert_eq!(compute_latest_patch_num(&[]), None);
    }

    #[test]
    fn lone_edit_has_no_latest() {
        assert_eq!(compute_latest_patch_num(&[ps(PatchNum::Edit)]), None);
    }

    #[test]
    fn edit_on_current_requires_edit_first_and_two_entries() {
        assert!(has_edit_based_on_current_patch_set(&[
            ps(PatchNum::Edit),
            ps(PatchNum::Ordinal(1)),
        ]));
        assert!(!has_edit_based_on_current_patch_set(&[ps(PatchNum::Edit)]));
        assert!(!has_edit_based_on_current_patch_set(&[
            ps(PatchNum::Ordinal(2)),
            ps(PatchNum::Edit),
            ps(PatchNum::Ordinal(1)),
        ]));
    }

    #[test]
    fn edit_loaded_on_either_side() {
        assert!(has_edit_patchset_loaded(&PatchRange {
            patch_num: Some(PatchNum::Edit),
            base_patch_num: Some(BasePatchNum::Parent),
        }));
        assert!(has_edit_patchset_loaded(&PatchRange {
            patch_num: Some(PatchNum::Ordinal(3)),
            base_patch_num: Some(PatchNum::Edit.into()),
        }));
        assert!(!has_edit_patchset_loaded(&PatchRange {
            patch_num: Some(PatchNum::Ordinal(3)),
            base_patch_num: Some(BasePatchNum::MergeParent(1)),
        }));
        assert!(!has_edit_patchset_loaded(&PatchRange::default()));
    }

    #[test]
    fn sorted_index_lookup() {
        let history = vec![
            ps(PatchNum::Ordinal(2)),
            ps(PatchNum::Edit),
            ps(PatchNum::Ordinal(1)),
        ];
        assert_eq!(find_sorted_index(PatchNum::Edit, &history), Some(1));
        assert_eq!(find_sorted_index(PatchNum::Ordinal(1), &history), Some(2));
        assert_eq!(find_sorted_index(PatchNum::Ordinal(7), &history), None);
    }
}
