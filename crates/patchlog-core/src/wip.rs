//! Work-in-progress replay over the change message log.
//!
//! The log is the only record of when a change entered or left WIP, so
//! each patch set's flag is recovered by walking the messages in order and
//! stamping the running state onto every patch set a message mentions.

use crate::change::ChangeMessageInfo;
use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Tags of messages that move a change into WIP.
pub const WIP_TAGS: &[&str] = &[
    "autogenerated:gerrit:newWipPatchSet",
    "autogenerated:gerrit:setWorkInProgress",
];

/// Tags of messages that move a change out of WIP.
pub const READY_TAGS: &[&str] = &["autogenerated:gerrit:setReadyForReview"];

/// Recognized message tags. Unknown tags leave the running flag alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WipTags {
    pub entered: Vec<String>,
    pub exited: Vec<String>,
}

impl Default for WipTags {
    fn default() -> Self {
        Self {
            entered: WIP_TAGS.iter().map(ToString::to_string).collect(),
            exited: READY_TAGS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TagConfigFile {
    #[serde(default)]
    wip: WipTags,
}

impl WipTags {
    pub fn enters_wip(&self, tag: &str) -> bool {
        self.entered.iter().any(|t| t == tag)
    }

    pub fn exits_wip(&self, tag: &str) -> bool {
        self.exited.iter().any(|t| t == tag)
    }

    /// Parse a `[wip]` table from TOML. Missing keys keep the defaults.
    pub fn from_toml_str(text: &str, origin: &str) -> Result<Self, CoreError> {
        toml::from_str::<TagConfigFile>(text)
            .map(|file| file.wip)
            .map_err(|source| CoreError::ParseToml {
                path: origin.to_string(),
                source,
            })
    }

    pub fn load_toml(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| CoreError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text, &path.display().to_string())
    }
}

/// Per-patch-set WIP flags recovered from one replay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WipState {
    flags: BTreeMap<u32, bool>,
}

impl WipState {
    /// Flag for patch set `ordinal`, or `None` if no message mentioned it.
    pub fn get(&self, ordinal: u32) -> Option<bool> {
        self.flags.get(&ordinal).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, bool)> + '_ {
        self.flags.iter().map(|(k, v)| (*k, *v))
    }

    /// Record `wip` for `ordinal` unless it is already false. A false
    /// entry is final for the rest of the replay; an absent or true entry
    /// may still be overwritten.
    fn record(&mut self, ordinal: u32, wip: bool) {
        if self.flags.get(&ordinal) != Some(&false) {
            self.flags.insert(ordinal, wip);
        }
    }
}

/// Replay `messages` front to back starting from the change's current
/// `work_in_progress` flag.
pub fn compute_wip_state(
    change_wip: bool,
    messages: &[ChangeMessageInfo],
    tags: &WipTags,
) -> WipState {
    let mut state = WipState::default();
    let mut wip = change_wip;

    for message in messages {
        if let Some(tag) = message.tag.as_deref() {
            if tags.enters_wip(tag) {
                wip = true;
            } else if tags.exits_wip(tag) {
                wip = false;
            }
        }
        if let Some(ordinal) = message.referenced_patch_set() {
            state.record(ordinal, wip);
        }
    }

    state
}
