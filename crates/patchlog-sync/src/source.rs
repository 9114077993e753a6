//! Change detail sources.

use async_trait::async_trait;
use patchlog_core::ChangeInfo;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Errors raised by a source while fetching a change detail.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("failed to read change detail: {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid change detail at {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("change detail source unavailable: {0}")]
    Unavailable(String),
}

/// Retrieves the current detail of a change by number.
///
/// `Ok(None)` means the source answered but has no such change.
#[async_trait]
pub trait ChangeDetailSource: Send + Sync {
    async fn change_detail(&self, number: u64) -> Result<Option<ChangeInfo>, FetchError>;
}

/// Serves change details from `<dir>/<number>.json` files.
#[derive(Debug, Clone)]
pub struct JsonDirSource {
    dir: PathBuf,
}

impl JsonDirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn detail_path(&self, number: u64) -> PathBuf {
        self.dir.join(format!("{number}.json"))
    }
}

#[async_trait]
impl ChangeDetailSource for JsonDirSource {
    async fn change_detail(&self, number: u64) -> Result<Option<ChangeInfo>, FetchError> {
        let path = self.detail_path(number);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(change = number, path = %path.display(), "no change detail on disk");
                return Ok(None);
            }
            Err(source) => {
                return Err(FetchError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };

        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| FetchError::Parse {
                path: path.display().to_string(),
                source,
            })
    }
}
