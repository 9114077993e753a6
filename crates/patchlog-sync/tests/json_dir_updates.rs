//! Update detection against the on-disk change detail source.

use patchlog_core::ChangeInfo;
use patchlog_sync::{JsonDirSource, UpdateError, fetch_change_updates};
use serde_json::json;
use std::path::PathBuf;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn known(number: u64) -> ChangeInfo {
    ChangeInfo::load_json(fixtures_dir().join("known").join(format!("{number}.json")))
        .unwrap_or_else(|e| panic!("failed to load known change {number}: {e}"))
}

#[tokio::test]
async fn new_messages_with_identical_patch_sets() {
    let source = JsonDirSource::new(fixtures_dir().join("server"));
    let updates = fetch_change_updates(&known(2001), &source)
        .await
        .expect("update check should succeed");

    assert_eq!(
        serde_json::to_value(&updates).expect("updates serialize"),
        json!({"isLatest": true, "newStatus": null, "newMessages": true})
    );
}

#[tokio::test]
async fn change_missing_on_server() {
    let source = JsonDirSource::new(fixtures_dir().join("server"));
    let err = fetch_change_updates(&known(2002), &source)
        .await
        .expect_err("missing change must fail");
    assert!(matches!(err, UpdateError::DetailNotFound(2002)));
    assert_eq!(err.to_string(), "change detail not found: 2002");
}
