//! Change detail documents as delivered by the review server.
//!
//! Only the fields the history derivations read are modeled; unknown
//! fields in the JSON are ignored.

use crate::error::CoreError;
use crate::patch_num::PatchNum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// One uploaded patch set, or the change edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevisionInfo {
    #[serde(rename = "_number")]
    pub number: PatchNum,
    /// Patch set the edit was created on. Only set for the edit.
    #[serde(
        rename = "basePatchNum",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub base_patch_num: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RevisionInfo {
    pub fn new(number: impl Into<PatchNum>) -> Self {
        Self {
            number: number.into(),
            base_patch_num: None,
            description: None,
        }
    }

    pub fn edit(base_patch_num: u32) -> Self {
        Self {
            number: PatchNum::Edit,
            base_patch_num: Some(base_patch_num),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// One entry of the change's message log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeMessageInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(
        rename = "_revision_number",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub revision_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ChangeMessageInfo {
    pub fn tagged(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn on_revision(mut self, revision_number: u32) -> Self {
        self.revision_number = Some(revision_number);
        self
    }

    /// Patch set this message refers to. Zero counts as no reference.
    pub fn referenced_patch_set(&self) -> Option<u32> {
        self.revision_number.filter(|n| *n != 0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeStatus {
    New,
    Merged,
    Abandoned,
}

impl ChangeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeStatus::New => "NEW",
            ChangeStatus::Merged => "MERGED",
            ChangeStatus::Abandoned => "ABANDONED",
        }
    }
}

impl fmt::Display for ChangeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of a change: its revisions keyed by commit hash and its
/// chronological message log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeInfo {
    #[serde(rename = "_number")]
    pub number: u64,
    pub status: ChangeStatus,
    #[serde(default)]
    pub work_in_progress: bool,
    #[serde(default)]
    pub revisions: BTreeMap<String, RevisionInfo>,
    #[serde(default)]
    pub messages: Vec<ChangeMessageInfo>,
}

impl ChangeInfo {
    pub fn new(number: u64, status: ChangeStatus) -> Self {
        Self {
            number,
            status,
            work_in_progress: false,
            revisions: BTreeMap::new(),
            messages: Vec::new(),
        }
    }

    pub fn with_revision(mut self, sha: impl Into<String>, revision: RevisionInfo) -> Self {
        self.revisions.insert(sha.into(), revision);
        self
    }

    pub fn with_message(mut self, message: ChangeMessageInfo) -> Self {
        self.messages.push(message);
        self
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    /// Parse a change document from a JSON string. `origin` names the
    /// source in error messages.
    pub fn from_json_str(text: &str, origin: &str) -> Result<Self, CoreError> {
        serde_json::from_str(text).map_err(|source| CoreError::ParseJson {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CoreError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&text, &path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_accepts_server_field_names() {
        let raw = r#"{
            "_number": 42,
            "status": "NEW",
            "work_in_progress": true,
            "project": "ignored",
            "revisions": {
                "abc": {"_number": 1, "description": "first"},
                "def": {"_number": "edit", "basePatchNum": 1}
            },
            "messages": [
                {"id": "m1", "tag": "autogenerated:gerrit:newWipPatchSet", "_revision_number": 1}
            ]
        }"#;

        let change = ChangeInfo::from_json_str(raw, "inline").expect("change should parse");
        assert_eq!(change.number, 42);
        assert!(change.work_in_progress);
        assert_eq!(change.revisions["abc"].description.as_deref(), Some("first"));
        assert_eq!(change.revisions["def"], RevisionInfo::edit(1));
        assert_eq!(change.messages[0].referenced_patch_set(), Some(1));
    }

    #[test]
    fn missing_collections_default_to_empty() {
        let change = ChangeInfo::from_json_str(r#"{"_number": 7, "status": "MERGED"}"#, "inline")
            .expect("change should parse");
        assert!(!change.work_in_progress);
        assert!(change.revisions.is_empty());
        assert_eq!(change.message_count(), 0);
    }

    #[test]
    fn parse_errors_name_their_origin() {
        let err = ChangeInfo::from_json_str("{", "known.json").expect_err("must fail");
        assert!(err.to_string().contains("known.json"));
    }

    #[test]
    fn zero_revision_number_is_not_a_reference() {
        let message = ChangeMessageInfo::default().on_revision(0);
        assert_eq!(message.referenced_patch_set(), None);
    }
}
