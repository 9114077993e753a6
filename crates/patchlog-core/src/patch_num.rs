//! Patch set identifiers and their total order.
//!
//! A revision is either a numbered patch set or the change edit. The edit
//! has no number of its own, so ordering goes through [`sort_key`], which
//! embeds ordinals at odd positions and the edit at the even slot right
//! above the patch set it was based on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Wire spelling of the change edit.
pub const EDIT_PATCH_NUM: &str = "edit";

/// Wire spelling of the base commit of the first patch set.
pub const PARENT_PATCH_NUM: &str = "PARENT";

/// Identifier of one revision of a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPatchNum", into = "RawPatchNum")]
pub enum PatchNum {
    /// An uploaded patch set, numbered from 1.
    Ordinal(u32),
    /// The mutable change edit.
    Edit,
}

impl PatchNum {
    pub fn is_edit(&self) -> bool {
        matches!(self, PatchNum::Edit)
    }

    /// The ordinal, or `None` for the edit.
    pub fn ordinal(&self) -> Option<u32> {
        match self {
            PatchNum::Ordinal(n) => Some(*n),
            PatchNum::Edit => None,
        }
    }
}

impl fmt::Display for PatchNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatchNum::Ordinal(n) => write!(f, "{n}"),
            PatchNum::Edit => f.write_str(EDIT_PATCH_NUM),
        }
    }
}

impl From<u32> for PatchNum {
    fn from(n: u32) -> Self {
        PatchNum::Ordinal(n)
    }
}

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum PatchNumError {
    #[error("invalid patch set number: {0}")]
    Invalid(String),
}

impl FromStr for PatchNum {
    type Err = PatchNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == EDIT_PATCH_NUM {
            return Ok(PatchNum::Edit);
        }
        trimmed
            .parse::<u32>()
            .map(PatchNum::Ordinal)
            .map_err(|_| PatchNumError::Invalid(s.to_string()))
    }
}

/// JSON shape shared by patch numbers: a bare integer or a string.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawPatchNum {
    Number(i64),
    Text(String),
}

impl TryFrom<RawPatchNum> for PatchNum {
    type Error = PatchNumError;

    fn try_from(raw: RawPatchNum) -> Result<Self, Self::Error> {
        match raw {
            RawPatchNum::Number(n) => u32::try_from(n)
                .map(PatchNum::Ordinal)
                .map_err(|_| PatchNumError::Invalid(n.to_string())),
            RawPatchNum::Text(text) => text.parse(),
        }
    }
}

impl From<PatchNum> for RawPatchNum {
    fn from(num: PatchNum) -> Self {
        match num {
            PatchNum::Ordinal(n) => RawPatchNum::Number(i64::from(n)),
            PatchNum::Edit => RawPatchNum::Text(EDIT_PATCH_NUM.to_string()),
        }
    }
}

/// Left-hand side of a viewed patch range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPatchNum", into = "RawPatchNum")]
pub enum BasePatchNum {
    /// The commit the first patch set was based on.
    Parent,
    /// The k-th parent of a merge commit, spelled `-k`.
    MergeParent(u32),
    PatchSet(PatchNum),
}

impl BasePatchNum {
    pub fn is_merge_parent(&self) -> bool {
        matches!(self, BasePatchNum::MergeParent(_))
    }

    /// 1-based merge parent index for `-k` ranges.
    pub fn parent_index(&self) -> Option<u32> {
        match self {
            BasePatchNum::MergeParent(k) => Some(*k),
            _ => None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, BasePatchNum::PatchSet(PatchNum::Edit))
    }
}

impl fmt::Display for BasePatchNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BasePatchNum::Parent => f.write_str(PARENT_PATCH_NUM),
            BasePatchNum::MergeParent(k) => write!(f, "-{k}"),
            BasePatchNum::PatchSet(num) => fmt::Display::fmt(num, f),
        }
    }
}

impl From<PatchNum> for BasePatchNum {
    fn from(num: PatchNum) -> Self {
        BasePatchNum::PatchSet(num)
    }
}

impl FromStr for BasePatchNum {
    type Err = PatchNumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed == PARENT_PATCH_NUM {
            return Ok(BasePatchNum::Parent);
        }
        if let Some(index) = trimmed.strip_prefix('-') {
            return index
                .parse::<u32>()
                .ok()
                .filter(|k| *k > 0)
                .map(BasePatchNum::MergeParent)
                .ok_or_else(|| PatchNumError::Invalid(s.to_string()));
        }
        trimmed.parse().map(BasePatchNum::PatchSet)
    }
}

impl TryFrom<RawPatchNum> for BasePatchNum {
    type Error = PatchNumError;

    fn try_from(raw: RawPatchNum) -> Result<Self, Self::Error> {
        match raw {
            RawPatchNum::Number(n) if n < 0 => u32::try_from(n.unsigned_abs())
                .map(BasePatchNum::MergeParent)
                .map_err(|_| PatchNumError::Invalid(n.to_string())),
            RawPatchNum::Number(n) => {
                PatchNum::try_from(RawPatchNum::Number(n)).map(BasePatchNum::PatchSet)
            }
            RawPatchNum::Text(text) => text.parse(),
        }
    }
}

impl From<BasePatchNum> for RawPatchNum {
    fn from(base: BasePatchNum) -> Self {
        match base {
            BasePatchNum::Parent => RawPatchNum::Text(PARENT_PATCH_NUM.to_string()),
            BasePatchNum::MergeParent(k) => RawPatchNum::Number(-i64::from(k)),
            BasePatchNum::PatchSet(num) => num.into(),
        }
    }
}

/// A pair of revisions currently being compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatchRange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_num: Option<PatchNum>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_patch_num: Option<BasePatchNum>,
}

/// Ordering key for a revision.
///
/// Ordinal `n` maps to `2 * (n - 1) + 1` and the edit maps to
/// `2 * edit_parent`, so an edit on patch set 2 (key 4) lands between
/// patch set 2 (key 3) and patch set 3 (key 5). An edit without a
/// resolvable parent passes 0 and sorts below every ordinal.
pub fn sort_key(num: PatchNum, edit_parent: u32) -> i64 {
    match num {
        PatchNum::Ordinal(n) => 2 * (i64::from(n) - 1) + 1,
        PatchNum::Edit => 2 * i64::from(edit_parent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_map_to_odd_keys() {
        assert_eq!(sort_key(PatchNum::Ordinal(1), 0), 1);
        assert_eq!(sort_key(PatchNum::Ordinal(2), 0), 3);
        assert_eq!(sort_key(PatchNum::Ordinal(3), 7), 5);
    }

    #[test]
    fn edit_key_sits_between_parent_and_successor() {
        let edit = sort_key(PatchNum::Edit, 2);
        assert_eq!(edit, 4);
        assert!(sort_key(PatchNum::Ordinal(2), 2) < edit);
        assert!(edit < sort_key(PatchNum::Ordinal(3), 2));
    }

    #[test]
    fn orphan_edit_sorts_below_first_patch_set() {
        assert!(sort_key(PatchNum::Edit, 0) < sort_key(PatchNum::Ordinal(1), 0));
    }

    #[test]
    fn patch_num_accepts_integer_and_edit_spellings() {
        let nums: Vec<PatchNum> =
            serde_json::from_str(r#"[3, "edit", "4"]"#).expect("patch nums should parse");
        assert_eq!(
            nums,
            vec![PatchNum::Ordinal(3), PatchNum::Edit, PatchNum::Ordinal(4)]
        );
        assert_eq!(
            serde_json::to_string(&nums).expect("patch nums serialize"),
            r#"[3,"edit",4]"#
        );
    }

    #[test]
    fn patch_num_rejects_unknown_strings() {
        assert!(serde_json::from_str::<PatchNum>(r#""PARENT""#).is_err());
        assert!(serde_json::from_str::<PatchNum>("-1").is_err());
        assert!("draft".parse::<PatchNum>().is_err());
    }

    #[test]
    fn base_patch_num_understands_parent_and_merge_parents() {
        let bases: Vec<BasePatchNum> = serde_json::from_str(r#"["PARENT", -2, "-1", 5, "edit"]"#)
            .expect("bases should parse");
        assert_eq!(
            bases,
            vec![
                BasePatchNum::Parent,
                BasePatchNum::MergeParent(2),
                BasePatchNum::MergeParent(1),
                BasePatchNum::PatchSet(PatchNum::Ordinal(5)),
                BasePatchNum::PatchSet(PatchNum::Edit),
            ]
        );
        assert!(bases[1].is_merge_parent());
        assert_eq!(bases[1].parent_index(), Some(2));
        assert_eq!(bases[0].parent_index(), None);
        assert!(bases[4].is_edit());
        assert_eq!(bases[1].to_string(), "-2");
    }

    #[test]
    fn base_patch_num_rejects_zero_merge_parent() {
        assert!("-0".parse::<BasePatchNum>().is_err());
    }
}
